//! `wordCount` research.

use crate::text::clean_text;

/// Number of word tokens in the cleaned text. A token counts when it holds
/// at least one alphanumeric character, so stray punctuation is ignored.
pub fn word_count(text: &str) -> usize {
    count_words(&clean_text(text))
}

/// Word tokens in text that is already free of markup.
pub(crate) fn count_words(plain: &str) -> usize {
    plain
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}
