//! Whole-phrase Chinese-to-romanization lookup.
//!
//! The lexicon is static data: phrases the upload paths see constantly,
//! mapped to their pinyin. It is consulted only when a policy disallows
//! Chinese but asks for auto-conversion; ideographs left over after the
//! lookup pass are stripped by the sanitizer, never half-romanized.

use once_cell::sync::Lazy;

/// Phrase-to-romanization pairs, longest phrase first so a longer entry is
/// never shadowed by a shorter one it contains.
static LEXICON: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut entries = vec![
        ("有声书", "youshengshu"),
        ("屏幕录制", "luping"),
        ("视频", "shipin"),
        ("音频", "yinpin"),
        ("图片", "tupian"),
        ("照片", "zhaopian"),
        ("截图", "jietu"),
        ("文档", "wendang"),
        ("资料", "ziliao"),
        ("教程", "jiaocheng"),
        ("课程", "kecheng"),
        ("测试", "ceshi"),
        ("电影", "dianying"),
        ("电视剧", "dianshiju"),
        ("音乐", "yinyue"),
        ("歌曲", "gequ"),
        ("游戏", "youxi"),
        ("软件", "ruanjian"),
        ("安装包", "anzhuangbao"),
        ("压缩包", "yasuobao"),
        ("备份", "beifen"),
        ("下载", "xiazai"),
        ("上传", "shangchuan"),
        ("封面", "fengmian"),
        ("字幕", "zimu"),
        ("合集", "heji"),
        ("最终版", "zhongban"),
        ("新建", "xinjian"),
        // Filler word: the extension already says it is a file.
        ("文件", ""),
        ("副本", "fuben"),
    ];
    entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    entries
});

/// Replace every lexicon phrase found in `name` with its romanization.
///
/// Unmapped ideographs are left in place; the caller decides what happens
/// to them.
pub fn transliterate(name: &str) -> String {
    let mut out = name.to_string();
    for &(phrase, pinyin) in LEXICON.iter() {
        if out.contains(phrase) {
            out = out.replace(phrase, pinyin);
        }
    }
    out
}
