//! Per-file advice and batch aggregation.

use crate::core::{Advice, BatchAnalysis, BatchSummary, PolicyRecommendations, Severity};
use crate::patterns::{contains_chinese, contains_whitespace};
use crate::policy::FilenamePolicy;
use crate::validate::validate_filename;
use log::{debug, trace};

/// Share of high-risk names above which the flexible preset is no longer
/// suggested.
const HIGH_RISK_SHARE: f64 = 0.3;

/// Validate one filename and project the result into actionable form.
pub fn advise(filename: &str, policy: &FilenamePolicy) -> Advice {
    let validation = validate_filename(filename, policy);
    let recommended = validation
        .auto_fixed_name
        .clone()
        .unwrap_or_else(|| filename.to_string());
    trace!(
        "advise: {:?} -> valid={} severity={:?}",
        filename,
        validation.is_valid,
        validation.severity
    );
    Advice {
        original: filename.to_string(),
        needs_change: !validation.is_valid,
        can_auto_fix: validation.can_auto_fix,
        risk_level: validation.severity,
        recommended,
        validation,
    }
}

/// Run the advisor over every name in order and aggregate the outcome.
///
/// Duplicates are counted independently; an empty batch yields zero counts
/// and still recommends the flexible preset.
pub fn analyze_batch<S: AsRef<str>>(filenames: &[S], policy: &FilenamePolicy) -> BatchAnalysis {
    let advice: Vec<Advice> = filenames
        .iter()
        .map(|name| advise(name.as_ref(), policy))
        .collect();

    let mut summary = BatchSummary {
        total: advice.len(),
        ..BatchSummary::default()
    };
    for entry in &advice {
        if entry.validation.is_valid {
            summary.valid += 1;
        }
        if entry.needs_change {
            summary.needs_change += 1;
        }
        if entry.can_auto_fix {
            summary.can_auto_fix += 1;
        }
        match entry.risk_level {
            Severity::High => summary.high_risk += 1,
            Severity::Medium => summary.medium_risk += 1,
            Severity::Low => summary.low_risk += 1,
        }
    }

    let recommendations = PolicyRecommendations {
        use_flexible_policy: summary.total == 0
            || (summary.high_risk as f64) < (summary.total as f64) * HIGH_RISK_SHARE,
        allow_chinese: filenames
            .iter()
            .any(|name| contains_chinese(name.as_ref())),
        allow_spaces: filenames
            .iter()
            .any(|name| contains_whitespace(name.as_ref())),
    };

    debug!(
        "batch: total={} valid={} high_risk={} flexible={}",
        summary.total, summary.valid, summary.high_risk, recommendations.use_flexible_policy
    );

    BatchAnalysis {
        advice,
        summary,
        recommendations,
    }
}
