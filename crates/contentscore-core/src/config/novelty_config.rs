//! Keyword-novelty query configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the keyword-novelty rule and its worker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NoveltyConfig {
    /// Identity of the content object being edited. Default: 0.
    pub object_id: Option<u64>,
    /// Type of the content object (`post`, `page`, `term`). Default: `post`.
    pub object_type: Option<String>,
    /// Link to the list of content already using a keyword.
    /// `%focus_keyword%` and `%post_type%` are substituted.
    pub focus_keyword_link: Option<String>,
    /// Bounded request queue capacity. Default: 64.
    pub queue_capacity: Option<usize>,
}

impl NoveltyConfig {
    pub fn effective_object_id(&self) -> u64 {
        self.object_id.unwrap_or(0)
    }

    /// Returns the effective object type, defaulting to `post`.
    pub fn effective_object_type(&self) -> &str {
        self.object_type.as_deref().unwrap_or("post")
    }

    pub fn effective_focus_keyword_link(&self) -> &str {
        self.focus_keyword_link
            .as_deref()
            .unwrap_or("edit.php?post_type=%post_type%&focus_keyword=%focus_keyword%")
    }

    pub fn effective_queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(64)
    }
}
