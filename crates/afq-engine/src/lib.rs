//! AFQ Engine: Content Quality Scoring
//!
//! Turns a validated input document into a bounded, categorized audit
//! report. The engine is a pure function of the document (plus the
//! wall clock for identifiers): no I/O, no shared mutable state, each
//! call independently reentrant.
//!
//! # Example
//!
//! ```ignore
//! use afq_engine::{Evaluator, RubricEvaluator};
//!
//! let evaluator = RubricEvaluator::new();
//! let report = evaluator.evaluate(&document);
//! println!("{} ({})", report.overall_score.total, report.audit_id);
//! ```

pub mod evaluator;
pub mod rubric;

pub use evaluator::Evaluator;
pub use rubric::RubricEvaluator;

use afq_core::{AuditReport, InputDocument};

/// Quick evaluation with the default rubric
pub fn evaluate(document: &InputDocument) -> AuditReport {
    RubricEvaluator::new().evaluate(document)
}
