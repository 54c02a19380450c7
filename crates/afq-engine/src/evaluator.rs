//! Evaluator Trait: the scoring seam
//!
//! The pipeline and CLI depend only on this capability; the current
//! rubric is one concrete implementation, replaceable by an AI-backed
//! evaluator without touching the validator or CLI contract.

use afq_core::{AuditReport, InputDocument};

/// Capability of turning an input document into an audit report
pub trait Evaluator: Send + Sync {
    /// Identifier reported in audit metadata (ex: "mock-evaluator")
    fn id(&self) -> &'static str;

    /// Score a document against the rubric.
    ///
    /// The document is assumed to have passed input-schema validation;
    /// implementations must still tolerate an absent body without
    /// raising.
    fn evaluate(&self, document: &InputDocument) -> AuditReport;
}
