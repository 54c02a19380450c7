//! Schema locations as explicit configuration
//!
//! The validator never computes hidden deployment-relative paths;
//! callers say exactly where both schema documents live.

use std::path::{Path, PathBuf};

/// File name of the input schema inside a schema directory
pub const INPUT_SCHEMA_FILE: &str = "audit_input.schema.json";

/// File name of the output schema inside a schema directory
pub const OUTPUT_SCHEMA_FILE: &str = "audit_output.schema.json";

/// Locations of the input and output schema documents
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    pub input_schema: PathBuf,
    pub output_schema: PathBuf,
}

impl SchemaConfig {
    pub fn new(input_schema: impl Into<PathBuf>, output_schema: impl Into<PathBuf>) -> Self {
        Self {
            input_schema: input_schema.into(),
            output_schema: output_schema.into(),
        }
    }

    /// Resolve both schemas inside a single directory using the
    /// published file names.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_schema: dir.join(INPUT_SCHEMA_FILE),
            output_schema: dir.join(OUTPUT_SCHEMA_FILE),
        }
    }
}
