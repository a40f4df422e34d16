//! Length checks: body word count, paragraph length, permalink length.

use contentscore_core::errors::RuleError;
use contentscore_core::traits::{OverrideProvider, ScoreBoundary, TextProvider};

use super::{link, points, tr, CONTENT_LENGTH_KB};
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::traits::score_if;
use crate::rules::{AnalysisResult, Rule};

/// Word counts at or above this fall outside every bucket.
const WORD_COUNT_CEILING: u32 = 100_000;

pub(crate) fn default_length_boundaries() -> Vec<ScoreBoundary> {
    vec![
        ScoreBoundary::new(2500, 8),
        ScoreBoundary::new(2000, 5),
        ScoreBoundary::new(1500, 4),
        ScoreBoundary::new(1000, 3),
        ScoreBoundary::new(600, 2),
    ]
}

/// Body length scored against a descending boundary table.
pub struct LengthContent {
    boundaries: Vec<ScoreBoundary>,
}

impl LengthContent {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            boundaries: overrides.boundaries(ids::LENGTH_CONTENT, default_length_boundaries()),
        }
    }

    /// Score of the bucket `[boundary, previous boundary)` holding
    /// `word_count`; the top bucket ends at the ceiling.
    pub fn bucket_score(&self, word_count: u32) -> u32 {
        let mut upper = WORD_COUNT_CEILING;
        for row in &self.boundaries {
            if (row.boundary..upper).contains(&word_count) {
                return row.score;
            }
            upper = row.boundary;
        }
        0
    }
}

impl Rule for LengthContent {
    fn id(&self) -> &'static str {
        ids::LENGTH_CONTENT
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.boundaries.iter().map(|row| row.score).max().unwrap_or(0)
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(
            text,
            "Content should be %1$s long.",
            &[&link(CONTENT_LENGTH_KB, "600-2500 words")],
        )
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(text, "Minimum recommended content length should be 600 words.", &[]))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let word_count = researcher.word_count(paper.text_lower())?;
        if word_count == 0 {
            return Ok(result);
        }

        let count = u32::try_from(word_count).unwrap_or(u32::MAX);
        result.set_score(points(self.bucket_score(count)));
        let message = if result.has_score() {
            "Content is %1$d words long. Good job!"
        } else {
            "Content is %1$d words long. Consider using at least 600 words."
        };
        result.set_text(tr(text, message, &[&word_count]));
        Ok(result)
    }
}

/// No paragraph longer than the configured word limit.
pub struct ContentHasShortParagraphs {
    score: u32,
    word_limit: usize,
}

impl ContentHasShortParagraphs {
    pub fn new(overrides: &dyn OverrideProvider, word_limit: u32) -> Self {
        Self {
            score: overrides.score(ids::CONTENT_HAS_SHORT_PARAGRAPHS, 3),
            word_limit: word_limit as usize,
        }
    }
}

impl Rule for ContentHasShortParagraphs {
    fn id(&self) -> &'static str {
        ids::CONTENT_HAS_SHORT_PARAGRAPHS
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Add short and concise paragraphs for better readability and UX.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "Short paragraphs are easier to read and more pleasing to the eye. Long paragraphs scare the visitor, and they might result to SERPs looking for better readable content.",
            &[],
        ))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let has_long = researcher
            .paragraphs(paper.text())?
            .iter()
            .any(|p| p.word_count > self.word_limit);

        result.set_score(score_if(!has_long, self.score));
        result.set_text(tr(
            text,
            if has_long {
                "At least one paragraph is long. Consider using short paragraphs."
            } else {
                "You are using short paragraphs."
            },
            &[],
        ));
        Ok(result)
    }
}

/// Permalink no longer than the configured limit.
pub struct LengthPermalink {
    score: u32,
    max_length: usize,
}

impl LengthPermalink {
    pub fn new(overrides: &dyn OverrideProvider, max_length: u32) -> Self {
        Self {
            score: overrides.score(ids::LENGTH_PERMALINK, 4),
            max_length: max_length as usize,
        }
    }
}

impl Rule for LengthPermalink {
    fn id(&self) -> &'static str {
        ids::LENGTH_PERMALINK
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_url()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "URL unavailable. Add a short URL.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "Permalink should be at most %1$d characters long.",
            &[&self.max_length],
        ))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let length = paper.url().chars().count();
        result.set_score(score_if(length <= self.max_length, self.score));
        let message = if result.has_score() {
            "URL is %1$d characters long. Kudos!"
        } else {
            "URL is %1$d characters long. Consider shortening it."
        };
        result.set_text(tr(text, message, &[&length]));
        Ok(result)
    }
}
