//! Researcher: named pure functions rules consult for facts about the text.

use std::fmt;
use std::sync::Arc;

use contentscore_core::errors::ResearchError;
use rustc_hash::FxHashMap;

use super::links::{host_of, link_stats};
use super::paragraphs::paragraphs;
use super::types::{LinkStats, Paragraph, ResearchOutput};
use super::word_count::word_count;

/// A registered research: text in, typed fact out.
pub type ResearchFn = Arc<dyn Fn(&str) -> ResearchOutput + Send + Sync>;

pub const WORD_COUNT: &str = "wordCount";
pub const PARAGRAPHS: &str = "getParagraphs";
pub const LINK_STATS: &str = "getLinkStats";

/// Registry of researches, shared read-only by every rule of a pass.
#[derive(Clone)]
pub struct Researcher {
    researches: FxHashMap<String, ResearchFn>,
}

impl fmt::Debug for Researcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.researches.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Researcher").field("researches", &names).finish()
    }
}

impl Default for Researcher {
    fn default() -> Self {
        Self::new("")
    }
}

impl Researcher {
    /// Registry with the built-in researches. `site_url` decides which
    /// links count as internal; an empty value treats every absolute link
    /// as external.
    pub fn new(site_url: &str) -> Self {
        let site_host = host_of(site_url);
        let mut researcher = Self::empty();
        researcher.register(WORD_COUNT, |text| ResearchOutput::Count(word_count(text)));
        researcher.register(PARAGRAPHS, |text| ResearchOutput::Paragraphs(paragraphs(text)));
        researcher.register(LINK_STATS, move |text| {
            ResearchOutput::LinkStats(link_stats(text, site_host.as_deref()))
        });
        researcher
    }

    /// Registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            researches: FxHashMap::default(),
        }
    }

    /// Add a research, replacing any registered under the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, research: F)
    where
        F: Fn(&str) -> ResearchOutput + Send + Sync + 'static,
    {
        self.researches.insert(name.into(), Arc::new(research));
    }

    pub fn has_research(&self, name: &str) -> bool {
        self.researches.contains_key(name)
    }

    /// Look up a research by name.
    pub fn get_research(&self, name: &str) -> Result<ResearchFn, ResearchError> {
        self.researches
            .get(name)
            .cloned()
            .ok_or_else(|| ResearchError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn word_count(&self, text: &str) -> Result<usize, ResearchError> {
        match self.get_research(WORD_COUNT)?(text) {
            ResearchOutput::Count(count) => Ok(count),
            _ => Err(mismatch(WORD_COUNT, "count")),
        }
    }

    pub fn paragraphs(&self, text: &str) -> Result<Vec<Paragraph>, ResearchError> {
        match self.get_research(PARAGRAPHS)?(text) {
            ResearchOutput::Paragraphs(found) => Ok(found),
            _ => Err(mismatch(PARAGRAPHS, "paragraphs")),
        }
    }

    pub fn link_stats(&self, text: &str) -> Result<LinkStats, ResearchError> {
        match self.get_research(LINK_STATS)?(text) {
            ResearchOutput::LinkStats(stats) => Ok(stats),
            _ => Err(mismatch(LINK_STATS, "link stats")),
        }
    }
}

fn mismatch(name: &str, expected: &'static str) -> ResearchError {
    ResearchError::UnexpectedOutput {
        name: name.to_string(),
        expected,
    }
}
