//! `getParagraphs` research.

use super::types::Paragraph;
use super::word_count::count_words;
use crate::text::patterns::{RE_BLANK_LINE, RE_PARAGRAPH};
use crate::text::{clean_text, strip_scripts, strip_styles, strip_toc_block};

/// Split the body into paragraphs. `<p>` elements are used when present;
/// otherwise blocks separated by blank lines. Empty blocks and the TOC
/// block are dropped.
pub fn paragraphs(text: &str) -> Vec<Paragraph> {
    let body = strip_styles(&strip_scripts(&strip_toc_block(text)));

    let tagged: Vec<&str> = RE_PARAGRAPH
        .as_ref()
        .map(|re| {
            re.captures_iter(&body)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect()
        })
        .unwrap_or_default();

    let blocks: Vec<&str> = if !tagged.is_empty() {
        tagged
    } else {
        match RE_BLANK_LINE.as_ref() {
            Some(re) => re.split(&body).collect(),
            None => vec![body.as_str()],
        }
    };

    blocks
        .into_iter()
        .map(clean_text)
        .filter(|block| !block.is_empty())
        .map(|text| Paragraph {
            word_count: count_words(&text),
            text,
        })
        .collect()
}
