//! Compiled schema store and the validate-to-bool contract
use std::fs;
use std::path::Path;

use afq_core::AuditError;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::config::SchemaConfig;

/// Both contract schemas, compiled once and shared read-only.
///
/// Validation never mutates the document or the schema and never
/// panics; violations are reported on the error channel and surfaced
/// as `false` (or as structured messages via the `check_*` methods).
#[derive(Debug)]
pub struct SchemaStore {
    input: JSONSchema,
    output: JSONSchema,
}

impl SchemaStore {
    /// Load and compile both schemas from the configured locations.
    ///
    /// A missing file or unparsable/uncompilable schema is a
    /// configuration failure, distinct from document validation.
    pub fn load(config: &SchemaConfig) -> Result<Self, AuditError> {
        Ok(Self {
            input: compile_schema_file(&config.input_schema)?,
            output: compile_schema_file(&config.output_schema)?,
        })
    }

    /// Build a store from already-parsed schema values. Used for
    /// embedding and for tests with injected schemas.
    pub fn from_values(input: &Value, output: &Value) -> Result<Self, AuditError> {
        Ok(Self {
            input: compile_schema_value(input, "input schema")?,
            output: compile_schema_value(output, "output schema")?,
        })
    }

    /// Validate a candidate input document. On violation the first
    /// failing constraint goes to the error channel and this
    /// returns false.
    pub fn validate_input(&self, document: &Value) -> bool {
        report_first_violation("input", self.check_input(document))
    }

    /// Validate a freshly produced report against the output schema.
    /// A failure here is an internal-consistency bug: the report must
    /// never be delivered to the caller.
    pub fn validate_output(&self, document: &Value) -> bool {
        report_first_violation("output", self.check_output(document))
    }

    /// All input-schema violations for a document, in schema order
    pub fn check_input(&self, document: &Value) -> Vec<String> {
        collect_violations(&self.input, document)
    }

    /// All output-schema violations for a document, in schema order
    pub fn check_output(&self, document: &Value) -> Vec<String> {
        collect_violations(&self.output, document)
    }
}

fn compile_schema_file(path: &Path) -> Result<JSONSchema, AuditError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AuditError::Configuration(format!("cannot read schema {}: {}", path.display(), e))
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| {
        AuditError::Configuration(format!("schema {} is not valid JSON: {}", path.display(), e))
    })?;
    compile_schema_value(&value, &path.display().to_string())
}

fn compile_schema_value(value: &Value, origin: &str) -> Result<JSONSchema, AuditError> {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(value)
        .map_err(|e| AuditError::Configuration(format!("schema {} does not compile: {}", origin, e)))
}

fn collect_violations(schema: &JSONSchema, document: &Value) -> Vec<String> {
    match schema.validate(document) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{}: {}", path, e)
                }
            })
            .collect(),
    }
}

fn report_first_violation(which: &str, violations: Vec<String>) -> bool {
    match violations.first() {
        Some(first) => {
            tracing::error!("{} validation error: {}", which, first);
            false
        }
        None => true,
    }
}
