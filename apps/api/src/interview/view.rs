//! Render directive returned by every session endpoint. The browser UI draws
//! exactly what the view describes and keeps no state of its own.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::interview::prompts::COMPLETED_NOTICE;
use crate::models::message::Message;
use crate::session::{Session, SessionPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A one-shot inline notice, shown for the event that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPrompt {
    /// 1-based position
    pub number: usize,
    pub total: usize,
    pub text: String,
}

/// Event-specific parts of a view; everything else is derived from the session.
#[derive(Debug, Clone, Default)]
pub struct Directive {
    pub notices: Vec<Notice>,
    pub verdict: Option<bool>,
    pub reply: Option<String>,
}

impl Directive {
    pub fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub phase: SessionPhase,
    /// Whether the "start interview" action is offered.
    pub can_start: bool,
    pub candidate_summary: Option<Vec<String>>,
    pub question: Option<QuestionPrompt>,
    pub verdict: Option<bool>,
    pub reply: Option<String>,
    pub notices: Vec<Notice>,
    pub history: Option<Vec<Message>>,
}

impl SessionView {
    pub fn render(session: &Session, directive: Directive) -> Self {
        let phase = session.phase();
        let mut notices = directive.notices;

        let candidate_summary = if session.chat_active {
            session.candidate.as_ref().map(|c| c.summary_lines())
        } else {
            None
        };

        let question = match phase {
            SessionPhase::Interviewing => session.current_question().map(|text| QuestionPrompt {
                number: session.current_question_index + 1,
                total: session.questions.len(),
                text: text.to_string(),
            }),
            _ => None,
        };

        if phase == SessionPhase::OpenChat {
            notices.push(Notice::success(COMPLETED_NOTICE));
        }

        let interview_complete = session.all_questions_answered || session.ended;
        let history = if interview_complete && !session.context.is_empty() {
            Some(session.context.messages().to_vec())
        } else {
            None
        };

        Self {
            session_id: session.id,
            created_at: session.created_at,
            phase,
            can_start: !session.chat_active && session.candidate.is_some(),
            candidate_summary,
            question,
            verdict: directive.verdict,
            reply: directive.reply,
            notices,
            history,
        }
    }
}
