//! AFQ Schema: Contract Validation
//!
//! Loads the two versioned JSON Schema documents (input and output)
//! and validates candidate documents against them before they are
//! trusted or emitted.
//!
//! # Example
//!
//! ```ignore
//! use afq_schema::{SchemaConfig, SchemaStore};
//!
//! let config = SchemaConfig::from_dir("schemas");
//! let store = SchemaStore::load(&config)?;
//!
//! if !store.validate_input(&document) {
//!     // first failing constraint already reported on the error channel
//!     std::process::exit(1);
//! }
//! ```

pub mod config;
pub mod store;

pub use config::SchemaConfig;
pub use store::SchemaStore;
