//! Compiled character-class patterns shared by the sanitizer and validator.
//!
//! The exact set boundaries matter: the sanitizer and validator must agree on
//! what counts as an emoji, a CJK ideograph, an OS-reserved character, and a
//! "safe" character, or a validated-then-fixed name could fail re-validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Common emoji blocks: pictographs, emoticons, transport, flags, and the
/// dingbat/symbol ranges, plus variation selectors and the supplemental
/// symbols block.
pub(crate) static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        "\\x{1F300}-\\x{1F5FF}", // symbols & pictographs
        "\\x{1F600}-\\x{1F64F}", // emoticons
        "\\x{1F680}-\\x{1F6FF}", // transport & map
        "\\x{1F1E0}-\\x{1F1FF}", // regional indicators (flags)
        "\\x{1F900}-\\x{1F9FF}", // supplemental symbols
        "\\x{2600}-\\x{26FF}",   // misc symbols
        "\\x{2700}-\\x{27BF}",   // dingbats
        "\\x{FE00}-\\x{FE0F}",   // variation selectors
        "]",
    ))
    .expect("emoji pattern is valid")
});

/// CJK Unified Ideographs as the upload paths have always matched them.
pub(crate) static CJK: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\\x{4E00}-\\x{9FA5}]").expect("cjk pattern is valid"));

/// Characters no filesystem we target will accept: `< > : " | ? * \ /`.
pub(crate) static OS_RESERVED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"|?*\\/]"#).expect("reserved pattern is valid"));

/// Complement of the safe set when CJK counts as safe. Word characters are
/// ASCII only; whitespace is exempt here and handled by the space rule.
pub(crate) static UNSAFE_WITH_CJK: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[^0-9A-Za-z_\\x{4E00}-\\x{9FA5}\\-.\\s]").expect("unsafe pattern is valid")
});

/// Complement of the safe set when CJK does not count as safe.
pub(crate) static UNSAFE_ASCII_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\-.\s]").expect("unsafe pattern is valid"));

/// Runs of whitespace, folded to a single `_` when spaces are disallowed.
pub(crate) static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Repeated underscores and dots left behind by the replacement passes.
pub(crate) static UNDERSCORE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("_{2,}").expect("underscore pattern is valid"));
pub(crate) static DOT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{2,}").expect("dot pattern is valid"));

/// True when `s` contains any emoji code point.
pub(crate) fn contains_emoji(s: &str) -> bool {
    EMOJI.is_match(s)
}

/// True when `s` contains any CJK ideograph.
pub fn contains_chinese(s: &str) -> bool {
    CJK.is_match(s)
}

/// True when `s` contains any whitespace.
pub fn contains_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}

/// True when `s` contains any OS-reserved character.
pub(crate) fn contains_reserved(s: &str) -> bool {
    OS_RESERVED.is_match(s)
}
