//! Policy-driven filename sanitization.
//!
//! `sanitize_filename` is total: any input string comes out as a non-empty,
//! policy-compliant name. Pass order is load-bearing — emoji stripping and
//! special-character replacement run before the space rule and before
//! transliteration, so an emoji glued to a Chinese phrase cannot block the
//! whole-phrase lookup.

use crate::patterns::{
    CJK, DOT_RUN, OS_RESERVED, UNDERSCORE_RUN, UNSAFE_ASCII_ONLY, UNSAFE_WITH_CJK, WHITESPACE_RUN,
};
use crate::policy::FilenamePolicy;
use crate::transliterate::transliterate;

/// Name used when nothing usable survives sanitization.
pub const FALLBACK_NAME: &str = "file";

/// Sanitize `filename` into a form that satisfies `policy`.
///
/// The extension (last `.` onward) is preserved verbatim apart from ASCII
/// lowercasing; every transformation applies to the name portion only.
pub fn sanitize_filename(filename: &str, policy: &FilenamePolicy) -> String {
    if filename.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    let (name, extension) = split_extension(filename);
    let mut name: String = name.chars().take(policy.max_length).collect();

    if !policy.allow_emoji {
        name = crate::patterns::EMOJI.replace_all(&name, "").into_owned();
    }

    if !policy.allow_special_chars {
        // Reserved characters go first and unconditionally; everything else
        // outside the safe set becomes an underscore.
        name = OS_RESERVED.replace_all(&name, "").into_owned();
        let unsafe_class = if policy.cjk_is_safe() {
            &UNSAFE_WITH_CJK
        } else {
            &UNSAFE_ASCII_ONLY
        };
        name = unsafe_class.replace_all(&name, "_").into_owned();
    }

    if !policy.allow_spaces {
        name = WHITESPACE_RUN.replace_all(&name, "_").into_owned();
    }

    if !policy.allow_chinese {
        if policy.auto_convert {
            name = transliterate(&name);
        }
        // Whatever the lexicon did not cover is dropped, never left
        // half-romanized.
        name = CJK.replace_all(&name, "").into_owned();
    }

    name = UNDERSCORE_RUN.replace_all(&name, "_").into_owned();
    name = DOT_RUN.replace_all(&name, ".").into_owned();
    name = name.trim_matches(|c| c == '_' || c == '.').to_string();

    if name.is_empty() {
        name = FALLBACK_NAME.to_string();
    }

    if !policy.allow_chinese {
        name = name.to_ascii_lowercase();
    }

    format!("{name}{}", extension.to_ascii_lowercase())
}

/// Split into (name, extension), the extension being the last `.` onward.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) => (&filename[..idx], &filename[idx..]),
        None => (filename, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strict() -> FilenamePolicy {
        FilenamePolicy::strict()
    }

    #[test]
    fn clean_name_is_untouched() {
        assert_eq!(
            sanitize_filename("normal_file-123.mp4", &strict()),
            "normal_file-123.mp4"
        );
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize_filename("", &strict()), FALLBACK_NAME);
        assert_eq!(sanitize_filename("", &FilenamePolicy::flexible()), "file");
    }

    #[test]
    fn emoji_and_symbols_are_scrubbed() {
        assert_eq!(
            sanitize_filename("🔗🎈🎬@#$%tg_coserdh*.mp4", &strict()),
            "tg_coserdh.mp4"
        );
    }

    #[test]
    fn chinese_kept_under_flexible() {
        assert_eq!(
            sanitize_filename("测试文件.mp4", &FilenamePolicy::flexible()),
            "测试文件.mp4"
        );
    }

    #[test]
    fn chinese_transliterated_under_strict() {
        assert_eq!(sanitize_filename("测试文件.mp4", &strict()), "ceshi.mp4");
    }

    #[test]
    fn unmapped_ideographs_are_dropped_not_half_converted() {
        // "龍" is not in the lexicon; it must vanish rather than survive.
        assert_eq!(sanitize_filename("龍测试.mp4", &strict()), "ceshi.mp4");
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(sanitize_filename("Movie.MP4", &strict()), "movie.mp4");
    }

    #[test]
    fn name_is_lowercased_only_when_chinese_disallowed() {
        assert_eq!(sanitize_filename("Movie.mp4", &strict()), "movie.mp4");
        assert_eq!(
            sanitize_filename("Movie.mp4", &FilenamePolicy::flexible()),
            "Movie.mp4"
        );
    }

    #[test]
    fn whitespace_runs_fold_to_one_underscore() {
        assert_eq!(sanitize_filename("a  b\tc.mp4", &strict()), "a_b_c.mp4");
    }

    #[test]
    fn spaces_survive_flexible() {
        assert_eq!(
            sanitize_filename("my file.mp4", &FilenamePolicy::flexible()),
            "my file.mp4"
        );
    }

    #[test]
    fn reserved_characters_are_removed_not_replaced() {
        assert_eq!(sanitize_filename("a<b>c.mp4", &strict()), "abc.mp4");
    }

    #[test]
    fn leading_dot_is_trimmed() {
        assert_eq!(sanitize_filename(".hidden.mp4", &strict()), "hidden.mp4");
    }

    #[test]
    fn all_garbage_name_falls_back_but_keeps_extension() {
        assert_eq!(sanitize_filename("???.mp4", &strict()), "file.mp4");
    }

    #[test]
    fn name_is_truncated_to_max_length() {
        let policy = FilenamePolicy {
            max_length: 5,
            ..FilenamePolicy::strict()
        };
        assert_eq!(sanitize_filename("abcdefghij.mp4", &policy), "abcde.mp4");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let policy = FilenamePolicy {
            max_length: 2,
            ..FilenamePolicy::flexible()
        };
        assert_eq!(sanitize_filename("测试文件.mp4", &policy), "测试.mp4");
    }

    #[test]
    fn cjk_becomes_underscore_when_nothing_will_convert_it() {
        let policy = FilenamePolicy {
            auto_convert: false,
            ..FilenamePolicy::strict()
        };
        // Without conversion the special-character pass treats ideographs
        // like any other symbol.
        assert_eq!(sanitize_filename("a测试b.mp4", &policy), "a_b.mp4");
    }

    #[test]
    fn split_extension_takes_last_dot() {
        assert_eq!(split_extension("a.b.mp4"), ("a.b", ".mp4"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".gitignore"), ("", ".gitignore"));
    }
}
