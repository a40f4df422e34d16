//! Keyword novelty: asynchronous "is this focus keyword already used" check.

pub mod client;
pub mod rule;
pub mod state;
pub mod worker;

pub use client::{NoveltyClient, NoveltyRequest, NoveltyResponse};
pub use rule::{KeywordNotUsed, NoveltyUpdate, SEARCHING_TEXT};
pub use state::{Lookup, NoveltyMemo, NoveltyState};
pub use worker::{NoveltyCompletion, NoveltyWorker};
