//! Typed research outputs.

use serde::Serialize;

/// One paragraph of the content body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub text: String,
    pub word_count: usize,
}

/// Link profile of the content body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub total: usize,
    pub internal_total: usize,
    pub internal_dofollow: usize,
    pub external_total: usize,
    pub external_dofollow: usize,
}

/// Value produced by a registered research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ResearchOutput {
    Count(usize),
    Paragraphs(Vec<Paragraph>),
    LinkStats(LinkStats),
}

impl ResearchOutput {
    /// Shape name used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Count(_) => "count",
            Self::Paragraphs(_) => "paragraphs",
            Self::LinkStats(_) => "link stats",
        }
    }
}
