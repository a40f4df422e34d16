//! Checks driven by host flags: product schema, content AI, TOC plugin.

use contentscore_core::errors::RuleError;
use contentscore_core::traits::{OverrideProvider, TextProvider};

use super::{link, tr, CONTENT_AI_KB, TOC_KB};
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::traits::score_if;
use crate::rules::{AnalysisResult, Rule};

const PRODUCT_SCHEMA_TYPES: [&str; 3] = ["WooCommerceProduct", "EDDProduct", "Product"];

/// A product `@type` is among the content's schemas.
pub struct HasProductSchema {
    score: u32,
}

impl HasProductSchema {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::HAS_PRODUCT_SCHEMA, 2),
        }
    }
}

impl Rule for HasProductSchema {
    fn id(&self) -> &'static str {
        ids::HAS_PRODUCT_SCHEMA
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_schemas()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "You are not using the Product Schema for this Product.", &[])
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let has_product = paper
            .schemas()
            .iter()
            .any(|s| PRODUCT_SCHEMA_TYPES.contains(&s.schema_type.as_str()));
        result.set_score(score_if(has_product, self.score));
        result.set_text(tr(
            text,
            if has_product {
                "You are using the Product Schema for this Product"
            } else {
                "You are not using the Product Schema for this Product."
            },
            &[],
        ));
        Ok(result)
    }
}

/// `post_type` -> `Post`, `product_cat` -> `Product Cat`.
fn start_case(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Content was optimised with the content-assistance tool.
pub struct ContentAi {
    score: u32,
    post_type: String,
}

impl ContentAi {
    pub fn new(overrides: &dyn OverrideProvider, object_type: &str) -> Self {
        let post_type = start_case(object_type);
        Self {
            score: overrides.score(ids::CONTENT_AI, 5),
            post_type: if post_type.is_empty() { "Post".to_string() } else { post_type },
        }
    }

    fn tool_link(&self) -> String {
        link(CONTENT_AI_KB, "Content AI")
    }
}

impl Rule for ContentAi {
    fn id(&self) -> &'static str {
        ids::CONTENT_AI
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.content_ai()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Use %1$s to optimise the %2$s.", &[&self.tool_link(), &self.post_type])
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        let used = paper.content_ai();
        result.set_score(score_if(used, self.score));
        result.set_text(tr(
            text,
            if used {
                "You are using %1$s to optimise this %2$s."
            } else {
                "You are not using %1$s to optimise this %2$s."
            },
            &[&self.tool_link(), &self.post_type],
        ));
        Ok(result)
    }
}

/// A table-of-contents plugin is active on the host.
pub struct ContentHasToc {
    score: u32,
    has_toc_plugin: bool,
}

impl ContentHasToc {
    pub fn new(overrides: &dyn OverrideProvider, has_toc_plugin: bool) -> Self {
        Self {
            score: overrides.score(ids::CONTENT_HAS_TOC, 2),
            has_toc_plugin,
        }
    }
}

impl Rule for ContentHasToc {
    fn id(&self) -> &'static str {
        ids::CONTENT_HAS_TOC
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, _paper: &Paper) -> bool {
        self.has_toc_plugin
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Use Table of Content to break-down your text.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "Table of Contents help break down content into smaller, digestible chunks. It makes reading easier which in turn results in better rankings.",
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
        result.set_score(score_if(self.has_toc_plugin, self.score));
        let plugin = link(TOC_KB, "Table of Contents plugin");
        result.set_text(tr(
            text,
            if self.has_toc_plugin {
                "You seem to be using a %1$s to break-down your text."
            } else {
                "You don't seem to be using a %1$s."
            },
            &[&plugin],
        ));
        Ok(result)
    }
}
