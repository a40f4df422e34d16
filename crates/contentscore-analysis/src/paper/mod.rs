//! Content snapshot ("paper") scored by every rule.
//!
//! A `Paper` is immutable once built. Normalized (trimmed, lower-cased)
//! forms of every string field are computed once at construction so rules
//! never re-derive them and never need mutable access.

use serde::{Deserialize, Serialize};

/// Structured-data marker attached to the content (`{"@type": "Product"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMarker {
    #[serde(rename = "@type")]
    pub schema_type: String,
}

impl SchemaMarker {
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
        }
    }
}

/// Wire shape of a snapshot as handed over by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaperData {
    pub text: String,
    pub title: String,
    pub url: String,
    pub keyword: String,
    pub secondary_keywords: Vec<String>,
    pub thumbnail: String,
    pub thumbnail_alt: String,
    pub locale: String,
    pub schemas: Vec<SchemaMarker>,
    #[serde(rename = "contentAI")]
    pub content_ai: bool,
}

impl Default for PaperData {
    fn default() -> Self {
        Self {
            text: String::new(),
            title: String::new(),
            url: String::new(),
            keyword: String::new(),
            secondary_keywords: Vec::new(),
            thumbnail: String::new(),
            thumbnail_alt: String::new(),
            locale: "en_US".to_string(),
            schemas: Vec::new(),
            content_ai: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Normalized {
    text: String,
    title: String,
    keyword: String,
    thumbnail_alt: String,
}

/// Immutable content snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PaperData", into = "PaperData")]
pub struct Paper {
    data: PaperData,
    lower: Normalized,
}

impl From<PaperData> for Paper {
    fn from(data: PaperData) -> Self {
        let lower = Normalized {
            text: normalize(&data.text),
            title: normalize(&data.title),
            keyword: normalize(&data.keyword),
            thumbnail_alt: normalize(&data.thumbnail_alt),
        };
        Self { data, lower }
    }
}

impl From<Paper> for PaperData {
    fn from(paper: Paper) -> Self {
        paper.data
    }
}

/// Trim and case-fold.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl Paper {
    pub fn builder() -> PaperBuilder {
        PaperBuilder::default()
    }

    /// Parse a host-provided JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Snapshot of the same content scored against another keyword.
    /// Secondary keywords are dropped from the copy.
    pub fn with_keyword(&self, keyword: &str) -> Paper {
        let mut data = self.data.clone();
        data.keyword = keyword.to_string();
        data.secondary_keywords.clear();
        Paper::from(data)
    }

    // ---- Raw accessors ----
    pub fn text(&self) -> &str {
        &self.data.text
    }
    pub fn title(&self) -> &str {
        &self.data.title
    }
    pub fn url(&self) -> &str {
        &self.data.url
    }
    pub fn keyword(&self) -> &str {
        &self.data.keyword
    }
    pub fn secondary_keywords(&self) -> &[String] {
        &self.data.secondary_keywords
    }
    pub fn thumbnail(&self) -> &str {
        &self.data.thumbnail
    }
    pub fn thumbnail_alt(&self) -> &str {
        &self.data.thumbnail_alt
    }
    pub fn locale(&self) -> &str {
        &self.data.locale
    }
    pub fn schemas(&self) -> &[SchemaMarker] {
        &self.data.schemas
    }
    pub fn content_ai(&self) -> bool {
        self.data.content_ai
    }

    // ---- Normalized accessors ----
    pub fn text_lower(&self) -> &str {
        &self.lower.text
    }
    pub fn title_lower(&self) -> &str {
        &self.lower.title
    }
    pub fn keyword_lower(&self) -> &str {
        &self.lower.keyword
    }
    pub fn thumbnail_alt_lower(&self) -> &str {
        &self.lower.thumbnail_alt
    }

    /// Language part of the locale: `en_US` -> `en`.
    pub fn short_locale(&self) -> &str {
        self.data.locale.split(['_', '-']).next().unwrap_or("")
    }

    // ---- Presence checks ----
    pub fn has_text(&self) -> bool {
        !self.lower.text.is_empty()
    }
    pub fn has_title(&self) -> bool {
        !self.lower.title.is_empty()
    }
    pub fn has_keyword(&self) -> bool {
        !self.lower.keyword.is_empty()
    }
    pub fn has_url(&self) -> bool {
        !self.data.url.trim().is_empty()
    }
    pub fn has_thumbnail(&self) -> bool {
        !self.data.thumbnail.trim().is_empty()
    }
    pub fn has_thumbnail_alt(&self) -> bool {
        !self.lower.thumbnail_alt.is_empty()
    }
    pub fn has_schemas(&self) -> bool {
        !self.data.schemas.is_empty()
    }
}

/// Builder for `Paper`. Unset fields stay empty; locale defaults to `en_US`.
#[derive(Debug, Clone, Default)]
pub struct PaperBuilder {
    data: PaperData,
}

impl PaperBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.data.text = text.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.data.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.data.url = url.into();
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.data.keyword = keyword.into();
        self
    }

    pub fn secondary_keywords(mut self, keywords: Vec<String>) -> Self {
        self.data.secondary_keywords = keywords;
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.data.thumbnail = thumbnail.into();
        self
    }

    pub fn thumbnail_alt(mut self, alt: impl Into<String>) -> Self {
        self.data.thumbnail_alt = alt.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.data.locale = locale.into();
        self
    }

    pub fn schema(mut self, schema_type: impl Into<String>) -> Self {
        self.data.schemas.push(SchemaMarker::new(schema_type));
        self
    }

    pub fn content_ai(mut self, enabled: bool) -> Self {
        self.data.content_ai = enabled;
        self
    }

    pub fn build(self) -> Paper {
        Paper::from(self.data)
    }
}
