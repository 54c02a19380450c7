//! Data Model: InputDocument, AuditReport, Grade
use chrono::Utc;
use serde::{Deserialize, Serialize};

// ============================================================
// Input side
// ============================================================

/// Input document describing an article plus its affiliate links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    /// Editorial content under audit
    pub content: Content,
    /// Affiliate link entries; order is preserved into the report
    pub asp_links: Vec<AspLink>,
    /// Accepted but not yet consulted by scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_config: Option<EvaluationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub title: String,
    /// Article body; tolerated as absent and treated as empty
    #[serde(default)]
    pub body: String,
    pub meta: ContentMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMeta {
    pub target_keyword: String,
    pub product_category: String,
    pub asp_provider: String,
}

/// Affiliate-program link embedded in the content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspLink {
    pub url: String,
    pub product_name: String,
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
}

/// Placeholder for future strictness rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub strict_mode: bool,
    #[serde(default)]
    pub target_score: i64,
    #[serde(default)]
    pub check_link_validity: bool,
}

// ============================================================
// Output side
// ============================================================

/// Structured audit report gated against the publish threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unique token, "audit_" followed by a 14-digit timestamp
    pub audit_id: String,
    /// ISO-8601 instant of generation
    pub timestamp: String,
    pub overall_score: OverallScore,
    pub detailed_scores: DetailedScores,
    pub improvements: Vec<Improvement>,
    /// One entry per input link, same order
    pub link_validation_results: Vec<LinkValidation>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallScore {
    /// Total score in [0, 120]; the placeholder rubric emits [0, 100]
    pub total: i64,
    pub grade: Grade,
    /// True only at ELITE (total >= 114)
    pub auto_publish_eligible: bool,
}

/// Coarse quality bucket over the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
    Elite,
}

impl Grade {
    /// Map a total score to its grade, thresholds evaluated
    /// highest-first, first match wins.
    pub fn from_total(total: i64) -> Self {
        if total >= 114 {
            Grade::Elite
        } else if total >= 100 {
            Grade::Excellent
        } else if total >= 80 {
            Grade::Good
        } else if total >= 60 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }
}

/// Eight independent sub-score estimates. Not reconciled with
/// `overall_score.total` under the placeholder rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedScores {
    pub seo_optimization: i64,
    pub content_quality: i64,
    pub affiliate_integration: i64,
    pub link_validity: i64,
    pub user_value: i64,
    pub compliance: i64,
    pub conversion_potential: i64,
    pub technical_quality: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub impact_points: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkValidation {
    pub original_url: String,
    pub status: LinkStatus,
    pub redirect_count: u32,
    pub response_time_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Valid,
    Invalid,
    Redirect,
    Timeout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub evaluator_version: String,
    pub processing_time_seconds: f64,
    pub ai_model_used: String,
    pub content_length: usize,
}

// ============================================================
// Identifiers
// ============================================================

/// Generate a unique audit ID from the wall clock.
///
/// Second-granularity only: two IDs generated within the same second
/// collide. Acceptable for one-document-per-process runs; a sub-second
/// workload would need a counter or random suffix.
pub fn create_audit_id() -> String {
    format!("audit_{}", Utc::now().format("%Y%m%d%H%M%S"))
}

/// Current instant in ISO-8601
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}
