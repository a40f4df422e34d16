//! contentscore-analysis: scoring engine.
//!
//! - Paper: immutable content snapshot
//! - Research: named pure text facts (word count, paragraphs, links)
//! - Rules: the rule contract, result value and rule variants
//! - Analyzer: runs a rule list against one snapshot, isolating failures
//! - Results: per-keyword aggregation into a 0-100 composite
//! - Novelty: asynchronous keyword-novelty rule
//! - Session: all of the above for one editing session

pub mod analyzer;
pub mod novelty;
pub mod paper;
pub mod research;
pub mod results;
pub mod rules;
pub mod session;
pub mod text;

pub use analyzer::{AnalysisOutcome, Analyzer, RuleFailure};
pub use paper::Paper;
pub use research::Researcher;
pub use results::ResultManager;
pub use rules::{AnalysisResult, Rule, RuleSet};
pub use session::{PassReport, ScoringSession};
