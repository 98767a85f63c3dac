//! Common type definitions used across the crate.

use serde::{Deserialize, Serialize};

/// Overall risk level of a validated filename.
///
/// Derived `Ord` gives `Low < Medium < High`, so escalation across
/// validation rules is a running `max` and can never downgrade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Marker used in rendered reports.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Low => "○",
            Severity::Medium => "◐",
            Severity::High => "●",
        }
    }
}

/// Outcome of checking one filename against a policy.
///
/// Issues and suggestions are ordered by rule evaluation; several rules can
/// fire on the same name. `auto_fixed_name` is present only when at least
/// one issue fired and the name is still auto-fixable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub severity: Severity,
    pub can_auto_fix: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fixed_name: Option<String>,
}

/// A validation result projected into "what should the caller do" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub original: String,
    pub validation: ValidationResult,
    /// The auto-fixed name when one exists, otherwise the original.
    pub recommended: String,
    pub needs_change: bool,
    pub can_auto_fix: bool,
    pub risk_level: Severity,
}

/// Aggregate counts over a batch of filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub needs_change: usize,
    pub can_auto_fix: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

/// Policy hints derived from a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecommendations {
    /// True when high-risk names are under 30% of the batch (an empty batch
    /// counts as under).
    pub use_flexible_policy: bool,
    /// True when any original name in the batch contains a CJK ideograph.
    pub allow_chinese: bool,
    /// True when any original name in the batch contains whitespace.
    pub allow_spaces: bool,
}

/// Per-file advice plus batch-level aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub advice: Vec<Advice>,
    pub summary: BatchSummary,
    pub recommendations: PolicyRecommendations,
}
