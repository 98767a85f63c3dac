//! Rule-based filename validation.
//!
//! The validator reports *why* a name would be changed without changing it.
//! Every rule is evaluated independently so a single name can surface
//! several issues at once; severity only ever escalates across the rule
//! chain.

use crate::core::{Severity, ValidationResult};
use crate::patterns::{
    contains_chinese, contains_emoji, contains_reserved, contains_whitespace, UNSAFE_ASCII_ONLY,
    UNSAFE_WITH_CJK,
};
use crate::policy::FilenamePolicy;
use crate::sanitize::sanitize_filename;

/// Check `filename` against `policy` and report every violated rule.
pub fn validate_filename(filename: &str, policy: &FilenamePolicy) -> ValidationResult {
    if filename.is_empty() {
        return ValidationResult {
            is_valid: false,
            issues: vec!["文件名为空或无效".to_string()],
            suggestions: vec!["请提供有效的文件名".to_string()],
            severity: Severity::High,
            can_auto_fix: false,
            auto_fixed_name: None,
        };
    }

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut severity = Severity::Low;
    let mut can_auto_fix = true;

    if filename.chars().count() > policy.max_length {
        issues.push("文件名过长".to_string());
        suggestions.push(format!("将文件名控制在{}个字符以内", policy.max_length));
        severity = severity.max(Severity::Medium);
    }

    if !policy.allow_emoji && contains_emoji(filename) {
        issues.push("包含emoji字符".to_string());
        suggestions.push("移除emoji字符".to_string());
        severity = severity.max(Severity::High);
    }

    if contains_reserved(filename) {
        issues.push("包含系统保留字符".to_string());
        suggestions.push(r#"移除 < > : " | ? * \ / 字符"#.to_string());
        severity = severity.max(Severity::High);
    }

    if !policy.allow_special_chars && contains_special(filename, policy) {
        issues.push("包含特殊字符".to_string());
        suggestions.push("将特殊字符替换为下划线".to_string());
        severity = severity.max(Severity::Medium);
    }

    if !policy.allow_chinese && contains_chinese(filename) {
        issues.push("包含中文字符".to_string());
        if policy.auto_convert {
            suggestions.push("自动转换为拼音或移除中文字符".to_string());
        } else {
            suggestions.push("请使用英文文件名".to_string());
            severity = Severity::High;
            can_auto_fix = false;
        }
    }

    if !policy.allow_spaces && contains_whitespace(filename) {
        issues.push("包含空格".to_string());
        suggestions.push("用下划线替换空格".to_string());
        severity = severity.max(Severity::Low);
    }

    if filename.starts_with('.') {
        issues.push("以点开头".to_string());
        suggestions.push("移除文件名开头的点".to_string());
        severity = severity.max(Severity::Low);
    }

    let is_valid = issues.is_empty();
    let auto_fixed_name = if can_auto_fix && !is_valid {
        Some(sanitize_filename(filename, policy))
    } else {
        None
    };

    ValidationResult {
        is_valid,
        issues,
        suggestions,
        severity,
        can_auto_fix,
        auto_fixed_name,
    }
}

/// Special-character membership, whitespace excluded — the space rule owns
/// whitespace. The safe class must agree with the sanitizer's.
fn contains_special(filename: &str, policy: &FilenamePolicy) -> bool {
    if policy.cjk_is_safe() {
        UNSAFE_WITH_CJK.is_match(filename)
    } else {
        UNSAFE_ASCII_ONLY.is_match(filename)
    }
}
