//! Keyword usage in the body: density and image alt text.

use contentscore_core::errors::RuleError;
use contentscore_core::traits::{OverrideProvider, TextProvider};
use regex::RegexBuilder;

use super::{points, tr};
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::{AnalysisResult, Rule};
use crate::text::patterns::{is_match, RE_GALLERY, RE_IMG_ALT};
use crate::text::strip_tags;

/// Density band a keyword falls into, in percent of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityBand {
    Low,
    Fair,
    Good,
    Best,
    High,
}

impl DensityBand {
    /// Bands: below 0.5 low, `[0.5, 0.76)` fair, `[0.76, 1.0)` good,
    /// `[1.0, 2.5]` best, above 2.5 high.
    pub fn of(density: f64) -> Self {
        if density < 0.5 {
            Self::Low
        } else if density > 2.5 {
            Self::High
        } else if density < 0.76 {
            Self::Fair
        } else if density < 1.0 {
            Self::Good
        } else {
            Self::Best
        }
    }
}

/// Focus keyword occurrences relative to body word count.
pub struct KeywordDensity {
    fail: u32,
    fair: u32,
    good: u32,
    best: u32,
}

impl KeywordDensity {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            fail: overrides.score("keywordDensity_fail", 0),
            fair: overrides.score("keywordDensity_fair", 2),
            good: overrides.score("keywordDensity_good", 3),
            best: overrides.score("keywordDensity_best", 6),
        }
    }

    fn band_score(&self, band: DensityBand) -> u32 {
        match band {
            DensityBand::Low | DensityBand::High => self.fail,
            DensityBand::Fair => self.fair,
            DensityBand::Good => self.good,
            DensityBand::Best => self.best,
        }
    }
}

impl Rule for KeywordDensity {
    fn id(&self) -> &'static str {
        ids::KEYWORD_DENSITY
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.best
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Keyword Density is 0. Aim for around 1% Keyword Density.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "There is no ideal keyword density percentage, but it should not be too high. The most important thing is to keep the copy natural.",
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
        let word_count = researcher.word_count(paper.text_lower())?;
        if word_count == 0 || !paper.has_keyword() {
            return Ok(result);
        }

        let pattern = RegexBuilder::new(&regex::escape(paper.keyword_lower()))
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::EvaluationFailed {
                rule_id: self.id().to_string(),
                message: e.to_string(),
            })?;
        let occurrences = pattern.find_iter(&strip_tags(paper.text())).count();

        // Rounded to two decimals before banding, as displayed.
        let density = (occurrences as f64 / word_count as f64 * 10_000.0).round() / 100.0;
        let band = DensityBand::of(density);
        result.set_score(points(self.band_score(band)));

        let message = match band {
            DensityBand::Low => "Keyword Density is %1$s which is low, the Focus Keyword and combination appears %2$s times.",
            DensityBand::High => "Keyword Density is %1$s which is high, the Focus Keyword and combination appears %2$s times.",
            _ => "Keyword Density is %1$s, the Focus Keyword and combination appears %2$s times.",
        };
        result.set_text(tr(text, message, &[&format!("{density:.2}"), &occurrences]));
        Ok(result)
    }
}

/// Focus keyword appears in an image alt attribute or the thumbnail alt.
pub struct KeywordInImageAlt {
    score: u32,
}

impl KeywordInImageAlt {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::KEYWORD_IN_IMAGE_ALT, 2),
        }
    }
}

/// Keyword words with duplicates removed, first occurrence kept.
fn unique_words(keyword: &str) -> Vec<&str> {
    let mut seen = Vec::new();
    for word in keyword.split_whitespace() {
        if !seen.contains(&word) {
            seen.push(word);
        }
    }
    seen
}

/// Every word of `words` occurs in `haystack`, in order.
fn contains_in_order(haystack: &str, words: &[&str]) -> bool {
    let mut rest = haystack;
    for word in words {
        match rest.find(word) {
            Some(idx) => rest = &rest[idx + word.len()..],
            None => return false,
        }
    }
    !words.is_empty()
}

impl Rule for KeywordInImageAlt {
    fn id(&self) -> &'static str {
        ids::KEYWORD_IN_IMAGE_ALT
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_keyword() && (paper.has_text() || paper.has_thumbnail_alt())
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Add an image with your Focus Keyword as alt text.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "It is recommended to add the focus keyword in the alt attribute of one or more images.",
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
        let keyword = paper.keyword_lower();
        let words = unique_words(keyword);
        let joined = words.join(" ");

        let in_alt = paper.thumbnail_alt_lower() == keyword
            || paper.thumbnail_alt_lower().contains(&joined)
            || RE_IMG_ALT.as_ref().is_some_and(|re| {
                re.captures_iter(paper.text_lower())
                    .filter_map(|caps| caps.get(1))
                    .any(|alt| contains_in_order(alt.as_str(), &words))
            });

        if in_alt {
            result.set_score(Some(self.score));
            result.set_text(tr(text, "Focus Keyword found in image alt attribute(s).", &[]));
        } else if is_match(&RE_GALLERY, paper.text_lower()) {
            result.set_score(Some(self.score));
            result.set_text(tr(
                text,
                "We detected a gallery in your content & assuming that you added Focus Keyword in alt in at least one of the gallery images.",
                &[],
            ));
        }
        Ok(result)
    }
}
