//! Outbound link checks.

use contentscore_core::errors::RuleError;
use contentscore_core::traits::{OverrideProvider, TextProvider};

use super::tr;
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::traits::score_if;
use crate::rules::{AnalysisResult, Rule};

/// Content links to at least one external resource.
pub struct LinksHasExternals {
    score: u32,
}

impl LinksHasExternals {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::LINKS_HAS_EXTERNALS, 4),
        }
    }
}

impl Rule for LinksHasExternals {
    fn id(&self) -> &'static str {
        ids::LINKS_HAS_EXTERNALS
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Link out to external resources.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "It helps visitors read more about a topic and prevents pogosticking.",
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
        let stats = researcher.link_stats(paper.text())?;
        if stats.total == 0 {
            return Ok(result);
        }

        let has_external = stats.external_total > 0;
        result.set_score(score_if(has_external, self.score));
        result.set_text(tr(
            text,
            if has_external {
                "Great! You are linking to external resources."
            } else {
                "No outbound links were found. Link out to external resources."
            },
            &[],
        ));
        Ok(result)
    }
}

/// At least one external link is dofollow.
pub struct LinksNotAllExternals {
    score: u32,
}

impl LinksNotAllExternals {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::LINKS_NOT_ALL_EXTERNALS, 2),
        }
    }
}

impl Rule for LinksNotAllExternals {
    fn id(&self) -> &'static str {
        ids::LINKS_NOT_ALL_EXTERNALS
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Add DoFollow links pointing to external resources.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "PageRank Sculpting no longer works. Your posts should have a mix of nofollow and DoFollow links.",
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
        let stats = researcher.link_stats(paper.text())?;
        if stats.total == 0 {
            result.set_text(self.empty_text(text));
            return Ok(result);
        }

        let has_dofollow = stats.external_dofollow > 0;
        result.set_score(score_if(has_dofollow, self.score));
        let message = if has_dofollow {
            tr(text, "At least one external link with DoFollow found in your content.", &[])
        } else {
            tr(
                text,
                "We found %1$d outbound links in your content and all of them are nofollow.",
                &[&stats.external_total],
            )
        };
        result.set_text(message);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use contentscore_core::traits::StaticOverrides;

    use super::super::test_support::run;
    use super::*;

    #[test]
    fn external_link_found() {
        let paper = Paper::builder()
            .text(r#"<p>See <a href="https://rust-lang.org">Rust</a></p>"#)
            .build();
        assert_eq!(run(&LinksHasExternals::new(&StaticOverrides), &paper).score(), Some(4));
    }

    #[test]
    fn only_internal_links() {
        let paper = Paper::builder()
            .text(r#"<a href="/about">About</a> <a href="https://example.com/x">x</a>"#)
            .build();
        let result = run(&LinksHasExternals::new(&StaticOverrides), &paper);
        assert_eq!(result.score(), None);
        assert!(result.text().starts_with("No outbound links"));
    }

    #[test]
    fn no_links_leaves_result_unscored() {
        let paper = Paper::builder().text("plain text").build();
        let result = run(&LinksHasExternals::new(&StaticOverrides), &paper);
        assert_eq!(result.score(), None);
        assert_eq!(result.text(), "");
    }

    #[test]
    fn all_external_links_nofollow() {
        let paper = Paper::builder()
            .text(r#"<a href="https://a.org" rel="nofollow">a</a><a href="https://b.org" rel="nofollow sponsored">b</a>"#)
            .build();
        let result = run(&LinksNotAllExternals::new(&StaticOverrides), &paper);
        assert_eq!(result.score(), None);
        assert_eq!(
            result.text(),
            "We found 2 outbound links in your content and all of them are nofollow."
        );
    }

    #[test]
    fn one_dofollow_external_link() {
        let paper = Paper::builder()
            .text(r#"<a href="https://a.org" rel="nofollow">a</a><a href="https://b.org">b</a>"#)
            .build();
        assert_eq!(run(&LinksNotAllExternals::new(&StaticOverrides), &paper).score(), Some(2));
    }
}
