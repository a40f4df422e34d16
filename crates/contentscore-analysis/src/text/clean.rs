//! Pure text transforms: element stripping and whitespace cleanup.
//!
//! Element stripping removes the whole element including its contents.
//! The match is non-greedy and case-insensitive on the tag name. It is not
//! nesting-aware: nested same-named tags and tags inside HTML comments are
//! not balanced, and an unclosed element is left untouched.

use std::borrow::Cow;

use super::patterns::{RE_SCRIPT, RE_STYLE, RE_TAG, RE_TOC_BLOCK, RE_WHITESPACE};

fn replace_all<'a>(
    regex: &std::sync::LazyLock<Option<regex::Regex>>,
    text: &'a str,
    with: &str,
) -> Cow<'a, str> {
    match regex.as_ref() {
        Some(re) => re.replace_all(text, with),
        None => Cow::Borrowed(text),
    }
}

/// Remove `<script>` elements and their contents.
pub fn strip_scripts(text: &str) -> String {
    replace_all(&RE_SCRIPT, text, "").into_owned()
}

/// Remove `<style>` elements and their contents.
pub fn strip_styles(text: &str) -> String {
    replace_all(&RE_STYLE, text, "").into_owned()
}

/// Remove the table-of-contents block comment and everything inside it.
pub fn strip_toc_block(text: &str) -> String {
    replace_all(&RE_TOC_BLOCK, text, "").into_owned()
}

/// Remove tags but keep their text content.
pub fn strip_tags(text: &str) -> String {
    replace_all(&RE_TAG, text, " ").into_owned()
}

/// TOC block, scripts, styles and tags removed; whitespace collapsed and
/// trimmed.
pub fn clean_text(text: &str) -> String {
    let without_toc = strip_toc_block(text);
    let without_scripts = strip_scripts(&without_toc);
    let without_styles = strip_styles(&without_scripts);
    let without_tags = strip_tags(&without_styles);
    replace_all(&RE_WHITESPACE, &without_tags, " ")
        .trim()
        .to_string()
}
