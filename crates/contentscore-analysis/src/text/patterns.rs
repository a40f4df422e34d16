//! Compiled HTML/text patterns shared by the text helpers and rules.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! text_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Whole-element removal (non-greedy, not nesting-aware) ──────────────────
text_pattern!(RE_SCRIPT, r"(?is)<script[^>]*>.*?</script>");
text_pattern!(RE_STYLE, r"(?is)<style[^>]*>.*?</style>");
text_pattern!(
    RE_TOC_BLOCK,
    r"(?s)<!-- wp:rank-math/toc-block.*?<!-- /wp:rank-math/toc-block -->"
);

// ── Tags and whitespace ────────────────────────────────────────────────────
text_pattern!(RE_TAG, r"(?s)<[^>]*>");
text_pattern!(RE_WHITESPACE, r"\s+");

// ── Paragraphs ─────────────────────────────────────────────────────────────
text_pattern!(RE_PARAGRAPH, r"(?is)<p(?:\s[^>]*)?>(.*?)</p>");
text_pattern!(RE_BLANK_LINE, r"\n\s*\n");

// ── Links ──────────────────────────────────────────────────────────────────
text_pattern!(RE_ANCHOR, r"(?is)<a\s[^>]*>");
text_pattern!(RE_HREF, r#"(?i)\bhref\s*=\s*["']([^"']*)["']"#);
text_pattern!(RE_REL, r#"(?i)\brel\s*=\s*["']([^"']*)["']"#);

// ── Media ──────────────────────────────────────────────────────────────────
text_pattern!(RE_IMG, r"(?i)<img(?:[^>]+)?>");
text_pattern!(RE_GALLERY, r"(?i)\[gallery( [^\]]+?)?\]");
text_pattern!(RE_IFRAME, r"(?i)<iframe(?:[^>]+)?>");
text_pattern!(RE_VIDEO_SHORTCODE, r"(?i)\[video( [^\]]+?)?\]");
text_pattern!(RE_VIDEO_TAG, r"(?i)<video(?:[^>]+)?>");
text_pattern!(
    RE_VIDEO_URL,
    r"(?i)(http://|https://|)(player.|www.)?(vimeo\.com|youtu(be\.com|\.be|be\.googleapis\.com))/(video/|embed/|watch\?v=|v/)?([A-Za-z0-9._%-]*)(&\S+)?"
);
text_pattern!(RE_IMG_ALT, r#"(?i)<img[^>]*\balt\s*=\s*["']([^"']*)["']"#);

// ── Misc ───────────────────────────────────────────────────────────────────
text_pattern!(RE_DIGIT, r"\d");

/// Number of matches of `regex` in `text`; a pattern that failed to
/// compile matches nothing.
pub fn count_matches(regex: &LazyLock<Option<Regex>>, text: &str) -> usize {
    regex.as_ref().map_or(0, |re| re.find_iter(text).count())
}

/// Whether `regex` matches anywhere in `text`.
pub fn is_match(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}
