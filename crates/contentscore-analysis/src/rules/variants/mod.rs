//! Rule variants. Each is a small struct holding its resolved caps.

mod flags;
mod keyword;
mod length;
mod links;
mod media;
mod title;

pub use flags::{ContentAi, ContentHasToc, HasProductSchema};
pub use keyword::{KeywordDensity, KeywordInImageAlt};
pub use length::{ContentHasShortParagraphs, LengthContent, LengthPermalink};
pub use links::{LinksHasExternals, LinksNotAllExternals};
pub use media::ContentHasAssets;
pub use title::{KeywordInTitle, TitleHasNumber, TitleHasPowerWords, TitleStartWithKeyword};

use std::fmt::Display;

use contentscore_core::traits::{format_text, TextProvider};

pub(crate) const CONTENT_LENGTH_KB: &str =
    "https://rankmath.com/kb/score-100-in-tests/?utm_source=Plugin&utm_campaign=WP#overall-content-length";
pub(crate) const TOC_KB: &str =
    "https://rankmath.com/kb/score-100-in-tests/?utm_source=Plugin&utm_campaign=WP#table-of-contents";
pub(crate) const CONTENT_AI_KB: &str = "https://rankmath.com/kb/how-to-use-content-ai/";
pub(crate) const POWER_WORDS_KB: &str = "https://rankmath.com/blog/power-words/";

/// Translate `msgid` and fill its placeholders.
pub(crate) fn tr(text: &dyn TextProvider, msgid: &str, args: &[&dyn Display]) -> String {
    let translated = text.translate(msgid);
    if args.is_empty() {
        translated
    } else {
        format_text(&translated, args)
    }
}

/// `<a href="..." target="_blank">label</a>`
pub(crate) fn link(href: &str, label: &str) -> String {
    format!("<a href=\"{href}\" target=\"_blank\">{label}</a>")
}

/// Points earned, where zero means the check was not satisfied.
pub(crate) fn points(score: u32) -> Option<u32> {
    (score > 0).then_some(score)
}
