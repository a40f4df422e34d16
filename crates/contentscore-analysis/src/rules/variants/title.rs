//! Title composition checks.

use aho_corasick::{AhoCorasick, MatchKind};
use contentscore_core::errors::RuleError;
use contentscore_core::traits::{OverrideProvider, TextProvider};
use rustc_hash::FxHashSet;

use super::{link, tr, POWER_WORDS_KB};
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::traits::score_if;
use crate::rules::{AnalysisResult, Rule};
use crate::text::patterns::{is_match, RE_DIGIT};

/// Focus keyword appears in the title. English content is capped lower.
pub struct KeywordInTitle {
    score_en: u32,
    score_other: u32,
}

impl KeywordInTitle {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score_en: overrides.score(ids::KEYWORD_IN_TITLE, 36),
            score_other: overrides.score(ids::KEYWORD_IN_TITLE, 38),
        }
    }
}

impl Rule for KeywordInTitle {
    fn id(&self) -> &'static str {
        ids::KEYWORD_IN_TITLE
    }

    fn max_score(&self, short_locale: &str) -> u32 {
        if short_locale == "en" {
            self.score_en
        } else {
            self.score_other
        }
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_keyword() && paper.has_title()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Add Focus Keyword to the SEO title.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(text, "Make sure the focus keyword appears in the SEO post title too.", &[]))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let found = paper.title_lower().contains(paper.keyword_lower());
        result.set_score(score_if(found, result.max_score()));
        result.set_text(tr(
            text,
            if found {
                "Hurray! You're using Focus Keyword in the SEO Title."
            } else {
                "Focus Keyword does not appear in the SEO title."
            },
            &[],
        ));
        Ok(result)
    }
}

/// Focus keyword starts in the first half of the title.
pub struct TitleStartWithKeyword {
    score: u32,
}

impl TitleStartWithKeyword {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::TITLE_START_WITH_KEYWORD, 3),
        }
    }
}

impl Rule for TitleStartWithKeyword {
    fn id(&self) -> &'static str {
        ids::TITLE_START_WITH_KEYWORD
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_keyword() && paper.has_title()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Use the Focus Keyword near the beginning of SEO title.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "The SEO page title should contain the Focus Keyword preferably at the beginning.",
            &[],
        ))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let title = paper.title_lower();
        // Positions in characters, not bytes.
        let half = title.chars().count() / 2;
        let starts = title
            .find(paper.keyword_lower())
            .map(|byte_idx| title[..byte_idx].chars().count())
            .is_some_and(|position| position < half);

        result.set_score(score_if(starts, self.score));
        result.set_text(tr(
            text,
            if starts {
                "Focus Keyword used at the beginning of SEO title."
            } else {
                "Focus Keyword doesn't appear at the beginning of SEO title."
            },
            &[],
        ));
        Ok(result)
    }
}

/// Title contains a digit.
pub struct TitleHasNumber {
    score: u32,
}

impl TitleHasNumber {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::TITLE_HAS_NUMBER, 1),
        }
    }
}

impl Rule for TitleHasNumber {
    fn id(&self) -> &'static str {
        ids::TITLE_HAS_NUMBER
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_title()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Add a number to your title to improve CTR.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "Headlines with numbers are 36% more likely to generate clicks, according to research by Conductor.",
            &[],
        ))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let has_number = is_match(&RE_DIGIT, paper.title());
        result.set_score(score_if(has_number, self.score));
        result.set_text(tr(
            text,
            if has_number {
                "You are using a number in your SEO title."
            } else {
                "Your SEO title doesn't contain a number."
            },
            &[],
        ));
        Ok(result)
    }
}

/// Title contains at least one configured power word.
pub struct TitleHasPowerWords {
    score: u32,
    matcher: Option<AhoCorasick>,
}

impl TitleHasPowerWords {
    pub fn new(overrides: &dyn OverrideProvider, power_words: &[String]) -> Self {
        let words: Vec<String> = power_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let matcher = if words.is_empty() {
            None
        } else {
            match AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .match_kind(MatchKind::LeftmostLongest)
                .build(&words)
            {
                Ok(ac) => Some(ac),
                Err(e) => {
                    tracing::warn!(error = %e, "power word matcher failed to build");
                    None
                }
            }
        };

        Self {
            score: overrides.score(ids::TITLE_HAS_POWER_WORDS, 1),
            matcher,
        }
    }

    /// Distinct power words found as whole words in `title`.
    pub fn count_in(&self, title: &str) -> usize {
        let Some(matcher) = &self.matcher else {
            return 0;
        };
        let is_word_char = |c: Option<char>| c.is_some_and(char::is_alphanumeric);
        let found: FxHashSet<usize> = matcher
            .find_iter(title)
            .filter(|m| {
                !is_word_char(title[..m.start()].chars().next_back())
                    && !is_word_char(title[m.end()..].chars().next())
            })
            .map(|m| m.pattern().as_usize())
            .collect();
        found.len()
    }
}

impl Rule for TitleHasPowerWords {
    fn id(&self) -> &'static str {
        ids::TITLE_HAS_POWER_WORDS
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        self.matcher.is_some() && paper.has_title()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(
            text,
            "Add %s to your title to increase CTR.",
            &[&link(POWER_WORDS_KB, "power words")],
        )
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "Power Words are tried-and-true words that copywriters use to attract more clicks.",
            &[],
        ))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let found = self.count_in(paper.title_lower());
        result.set_score(score_if(found > 0, self.score));
        let message = if found > 0 {
            tr(text, "Your title contains %1$d power word(s). Booyah!", &[&found])
        } else {
            tr(
                text,
                "Your title doesn't contain a %1$s. Add at least one.",
                &[&link(POWER_WORDS_KB, "power word")],
            )
        };
        result.set_text(message);
        Ok(result)
    }
}
