//! AFQ Core: Data Model, Error Model, and Audit Identifiers
//!
//! Shared value types for the affiliate content quality pipeline:
//! the input document contract, the audit report contract, the
//! grade scale, and the unified error taxonomy.

pub mod data_model;
pub mod error;

pub use data_model::{
    AspLink, AuditReport, Content, ContentMeta, DetailedScores, EvaluationConfig, Grade,
    Improvement, InputDocument, LinkStatus, LinkValidation, OverallScore, ReportMetadata,
    Severity, create_audit_id, current_timestamp,
};
pub use error::AuditError;

/// Version of the AFQ pipeline, reported in audit metadata
pub const AFQ_VERSION: &str = "1.0.0";
