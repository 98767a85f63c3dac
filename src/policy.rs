//! Filename policy configuration and the built-in presets.

use serde::{Deserialize, Serialize};

/// Immutable description of what a filename is allowed to contain.
///
/// Policies are plain values: construct one (or take a preset), pass it by
/// reference into every operation, never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenamePolicy {
    /// Permit CJK Unified Ideograph characters.
    #[serde(default)]
    pub allow_chinese: bool,

    /// Permit whitespace in the name portion.
    #[serde(default)]
    pub allow_spaces: bool,

    /// Permit emoji code points.
    #[serde(default)]
    pub allow_emoji: bool,

    /// Permit punctuation/symbols outside the safe set.
    #[serde(default)]
    pub allow_special_chars: bool,

    /// Maximum length of the name portion (excluding extension), in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// When Chinese is disallowed, transliterate known phrases before
    /// stripping the remaining ideographs.
    #[serde(default)]
    pub auto_convert: bool,
}

fn default_max_length() -> usize {
    100
}

impl Default for FilenamePolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl FilenamePolicy {
    /// ASCII-only output: no Chinese, no spaces, no emoji, no special
    /// characters, names capped at 100 characters.
    pub fn strict() -> Self {
        Self {
            allow_chinese: false,
            allow_spaces: false,
            allow_emoji: false,
            allow_special_chars: false,
            max_length: 100,
            auto_convert: true,
        }
    }

    /// Keeps Chinese and spaces, still rejects emoji and symbol noise.
    pub fn flexible() -> Self {
        Self {
            allow_chinese: true,
            allow_spaces: true,
            allow_emoji: false,
            allow_special_chars: false,
            max_length: 200,
            auto_convert: true,
        }
    }

    /// Keeps Chinese but folds whitespace, rejects emoji and symbols.
    pub fn moderate() -> Self {
        Self {
            allow_chinese: true,
            allow_spaces: false,
            allow_emoji: false,
            allow_special_chars: false,
            max_length: 150,
            auto_convert: true,
        }
    }

    /// Whether CJK counts as "safe" in the special-character pass.
    ///
    /// Ideographs survive that pass whenever the dedicated Chinese step will
    /// handle them afterwards (kept outright, or transliterated then
    /// stripped). Only a policy that neither allows Chinese nor converts it
    /// treats CJK as just another special character.
    pub(crate) fn cjk_is_safe(&self) -> bool {
        self.allow_chinese || self.auto_convert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_limits() {
        assert_eq!(FilenamePolicy::strict().max_length, 100);
        assert_eq!(FilenamePolicy::flexible().max_length, 200);
        assert_eq!(FilenamePolicy::moderate().max_length, 150);
    }

    #[test]
    fn only_flexible_allows_spaces() {
        assert!(!FilenamePolicy::strict().allow_spaces);
        assert!(FilenamePolicy::flexible().allow_spaces);
        assert!(!FilenamePolicy::moderate().allow_spaces);
    }

    #[test]
    fn no_preset_allows_emoji_or_specials() {
        for policy in [
            FilenamePolicy::strict(),
            FilenamePolicy::flexible(),
            FilenamePolicy::moderate(),
        ] {
            assert!(!policy.allow_emoji);
            assert!(!policy.allow_special_chars);
        }
    }

    #[test]
    fn default_is_strict() {
        assert_eq!(FilenamePolicy::default(), FilenamePolicy::strict());
    }

    #[test]
    fn cjk_safety_follows_chinese_or_conversion() {
        assert!(FilenamePolicy::strict().cjk_is_safe());
        assert!(FilenamePolicy::flexible().cjk_is_safe());
        let neither = FilenamePolicy {
            allow_chinese: false,
            auto_convert: false,
            ..FilenamePolicy::strict()
        };
        assert!(!neither.cjk_is_safe());
    }
}
