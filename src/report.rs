//! Markdown and JSON rendering of a batch analysis.

use crate::core::BatchAnalysis;
use anyhow::Result;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Render a batch analysis as a Markdown report: the count block, the
/// policy recommendation block, and a table of the names that failed
/// validation. Conforming names are counted but not listed.
pub fn format_batch_report(analysis: &BatchAnalysis) -> String {
    let summary = &analysis.summary;
    let rec = &analysis.recommendations;
    let mut out = String::new();

    out.push_str("# 文件名批量检查报告\n\n");
    let _ = writeln!(out, "- 总数: {}", summary.total);
    let _ = writeln!(out, "- 合规: {}", summary.valid);
    let _ = writeln!(out, "- 需调整: {}", summary.needs_change);
    let _ = writeln!(out, "- 可自动修复: {}", summary.can_auto_fix);
    let _ = writeln!(
        out,
        "- 风险分布: 高 {} / 中 {} / 低 {}",
        summary.high_risk, summary.medium_risk, summary.low_risk
    );

    out.push_str("\n## 策略建议\n\n");
    let _ = writeln!(out, "- 推荐宽松策略: {}", yes_no(rec.use_flexible_policy));
    let _ = writeln!(out, "- 建议允许中文: {}", yes_no(rec.allow_chinese));
    let _ = writeln!(out, "- 建议允许空格: {}", yes_no(rec.allow_spaces));

    let offenders: Vec<_> = analysis
        .advice
        .iter()
        .filter(|entry| entry.needs_change)
        .collect();

    out.push_str("\n## 需要调整的文件\n\n");
    if offenders.is_empty() {
        out.push_str("所有文件名均符合当前策略。\n");
        return out;
    }

    out.push_str("| 原文件名 | 问题 | 建议名称 | 风险 |\n");
    out.push_str("|---|---|---|---|\n");
    for entry in offenders {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            entry.original,
            entry.validation.issues.join("；"),
            entry.recommended,
            entry.risk_level.marker()
        );
    }
    out
}

/// Write the Markdown report to `output_file`, or print it when no path is
/// given. Parent directories are created as needed.
pub fn write_report(analysis: &BatchAnalysis, output_file: Option<PathBuf>) -> Result<()> {
    let output = format_batch_report(analysis);
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Pretty JSON rendering of the full analysis.
pub fn to_json(analysis: &BatchAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "是"
    } else {
        "否"
    }
}
