//! Per-session state: the explicit context object every event handler
//! receives, plus the in-memory store that owns it.

pub mod context;
pub mod store;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;
use uuid::Uuid;

use crate::models::candidate::CandidateProfile;
use crate::models::message::Message;

pub use context::ConversationContext;
pub use store::SessionStore;

/// Where the candidate is in the screening flow. Derived from the session's
/// flags on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Intake,
    Interviewing,
    OpenChat,
    Ended,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub chat_active: bool,
    pub candidate: Option<CandidateProfile>,
    pub questions: Vec<String>,
    pub current_question_index: usize,
    /// Set once the index reaches the end of `questions`; unlocks open chat.
    pub all_questions_answered: bool,
    /// Set by an explicit end of conversation, cleared by the next profile
    /// submission or interview start.
    pub ended: bool,
    pub context: ConversationContext,
    /// Last time a request read or changed this session. Drives idle eviction.
    pub last_seen: Instant,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            chat_active: false,
            candidate: None,
            questions: Vec::new(),
            current_question_index: 0,
            all_questions_answered: false,
            ended: false,
            context: ConversationContext::default(),
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn is_idle(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() >= ttl
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.chat_active, self.all_questions_answered, self.ended) {
            (true, false, _) => SessionPhase::Interviewing,
            (true, true, _) => SessionPhase::OpenChat,
            (false, _, true) => SessionPhase::Ended,
            (false, _, false) => SessionPhase::Intake,
        }
    }

    /// Stores a new profile and wipes the dialogue. Interview progress
    /// (`current_question_index`, `all_questions_answered`) is left untouched.
    pub fn set_candidate(&mut self, profile: CandidateProfile) {
        self.candidate = Some(profile);
        self.ended = false;
        self.context.clear();
    }

    /// Activates the interview and seeds the dialogue with `greeting`.
    pub fn activate(&mut self, greeting: String) {
        self.chat_active = true;
        self.ended = false;
        self.context.clear();
        self.context.push(Message::assistant(greeting));
        self.mark_exhausted_if_done();
    }

    pub fn current_question(&self) -> Option<&str> {
        self.questions
            .get(self.current_question_index)
            .map(String::as_str)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_question_index >= self.questions.len()
    }

    /// Moves to the next question regardless of how the last one went.
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.current_question_index += 1;
        }
        self.mark_exhausted_if_done();
    }

    /// Deactivates the session, clears the dialogue and rewinds the interview
    /// so a later start begins from the first question.
    pub fn close(&mut self) {
        self.chat_active = false;
        self.ended = true;
        self.current_question_index = 0;
        self.all_questions_answered = false;
        self.context.clear();
    }

    fn mark_exhausted_if_done(&mut self) {
        if self.chat_active && self.is_exhausted() {
            self.all_questions_answered = true;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
