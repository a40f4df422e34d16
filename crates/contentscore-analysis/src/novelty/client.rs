//! Transport-agnostic keyword-novelty query.

use contentscore_core::errors::NoveltyError;
use serde::{Deserialize, Serialize};

/// "Has this keyword been used by other content?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoveltyRequest {
    pub keyword: String,
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub object_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoveltyResponse {
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

impl NoveltyResponse {
    /// Parse a `{"isNew": bool}` body.
    pub fn from_json(body: &str) -> Result<Self, NoveltyError> {
        serde_json::from_str(body).map_err(|e| NoveltyError::InvalidResponse(e.to_string()))
    }
}

/// Answers novelty queries. Called from the worker thread only.
pub trait NoveltyClient: Send + Sync {
    fn is_keyword_new(&self, request: &NoveltyRequest) -> Result<NoveltyResponse, NoveltyError>;
}

impl<F> NoveltyClient for F
where
    F: Fn(&NoveltyRequest) -> Result<NoveltyResponse, NoveltyError> + Send + Sync,
{
    fn is_keyword_new(&self, request: &NoveltyRequest) -> Result<NoveltyResponse, NoveltyError> {
        self(request)
    }
}
