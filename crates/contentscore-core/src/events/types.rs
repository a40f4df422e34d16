//! Event payload types.

/// Payload for `on_pass_started`.
#[derive(Debug, Clone)]
pub struct PassStartedEvent {
    pub keyword: String,
    pub rule_count: usize,
}

/// Payload for `on_pass_complete`.
#[derive(Debug, Clone)]
pub struct PassCompleteEvent {
    pub keyword: String,
    pub scored: usize,
    pub skipped: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

/// Payload for `on_rule_skipped`.
#[derive(Debug, Clone)]
pub struct RuleSkippedEvent {
    pub rule_id: String,
}

/// Payload for `on_rule_failed`.
#[derive(Debug, Clone)]
pub struct RuleFailedEvent {
    pub rule_id: String,
    pub error_code: String,
    pub message: String,
}

/// Payload for `on_result_updated`: a rule revised its result after the
/// pass that produced it had already returned.
#[derive(Debug, Clone)]
pub struct ResultUpdatedEvent {
    pub keyword: String,
    pub rule_id: String,
    pub score: Option<u32>,
    pub max_score: u32,
    pub text: String,
}

/// Payload for `on_novelty_query_issued`.
#[derive(Debug, Clone)]
pub struct NoveltyQueryIssuedEvent {
    pub keyword: String,
    pub object_id: u64,
    pub object_type: String,
}

/// Payload for `on_novelty_query_failed`.
#[derive(Debug, Clone)]
pub struct NoveltyQueryFailedEvent {
    pub keyword: String,
    pub message: String,
}

/// Payload for `on_score_changed`.
#[derive(Debug, Clone)]
pub struct ScoreChangedEvent {
    pub keyword: String,
    pub previous: Option<u32>,
    pub score: u32,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
