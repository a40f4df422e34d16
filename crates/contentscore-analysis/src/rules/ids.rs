//! Stable rule ids. Used as aggregation keys and override names.

pub const LENGTH_CONTENT: &str = "lengthContent";
pub const CONTENT_HAS_SHORT_PARAGRAPHS: &str = "contentHasShortParagraphs";
pub const KEYWORD_IN_TITLE: &str = "keywordInTitle";
pub const TITLE_START_WITH_KEYWORD: &str = "titleStartWithKeyword";
pub const TITLE_HAS_NUMBER: &str = "titleHasNumber";
pub const TITLE_HAS_POWER_WORDS: &str = "titleHasPowerWords";
pub const LENGTH_PERMALINK: &str = "lengthPermalink";
pub const LINKS_HAS_EXTERNALS: &str = "linksHasExternals";
pub const LINKS_NOT_ALL_EXTERNALS: &str = "linksNotAllExternals";
pub const KEYWORD_DENSITY: &str = "keywordDensity";
pub const KEYWORD_IN_IMAGE_ALT: &str = "keywordInImageAlt";
pub const CONTENT_HAS_ASSETS: &str = "contentHasAssets";
pub const HAS_PRODUCT_SCHEMA: &str = "hasProductSchema";
pub const CONTENT_AI: &str = "contentAI";
pub const CONTENT_HAS_TOC: &str = "contentHasTOC";
pub const KEYWORD_NOT_USED: &str = "keywordNotUsed";

/// Every synchronous rule, in display order.
pub const STANDARD: [&str; 15] = [
    LENGTH_CONTENT,
    CONTENT_HAS_SHORT_PARAGRAPHS,
    KEYWORD_IN_TITLE,
    TITLE_START_WITH_KEYWORD,
    TITLE_HAS_NUMBER,
    TITLE_HAS_POWER_WORDS,
    LENGTH_PERMALINK,
    LINKS_HAS_EXTERNALS,
    LINKS_NOT_ALL_EXTERNALS,
    KEYWORD_DENSITY,
    KEYWORD_IN_IMAGE_ALT,
    CONTENT_HAS_ASSETS,
    HAS_PRODUCT_SCHEMA,
    CONTENT_AI,
    CONTENT_HAS_TOC,
];
