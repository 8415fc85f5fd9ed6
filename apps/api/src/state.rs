use std::sync::Arc;

use crate::config::Config;
use crate::interview::checker::AnswerChecker;
use crate::llm_client::ChatCompletion;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient` against the configured endpoint.
    pub llm: Arc<dyn ChatCompletion>,
    /// Pluggable answer checker. Default: KeywordAnswerChecker.
    pub checker: Arc<dyn AnswerChecker>,
    pub sessions: SessionStore,
    pub config: Config,
}
