//! Screening flow: one handler per user action.
//!
//! Each handler takes the session by `&mut`, applies the action, and returns
//! the `SessionView` the UI should draw next. Actions that make no sense in
//! the current phase are rejected with `AppError::Conflict`; blank answers
//! and blank chat messages are ignored and produce an unchanged view.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::chat::{end_conversation, generate_response, ChatReply};
use crate::interview::checker::AnswerChecker;
use crate::interview::prompts::{greeting, CORRECT_NOTICE, INCORRECT_NOTICE, SUBMITTED_NOTICE};
use crate::interview::questions::generate_technical_questions;
use crate::interview::view::{Directive, Notice, SessionView};
use crate::llm_client::ChatCompletion;
use crate::models::candidate::ProfileSubmission;
use crate::models::message::Message;
use crate::session::{Session, SessionPhase};

/// A single user action against a session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SubmitProfile(ProfileSubmission),
    StartInterview,
    SubmitAnswer(String),
    SendChat(String),
    EndChat,
}

/// Collaborators every handler needs, borrowed from `AppState` per request.
pub struct Interviewer<'a> {
    pub llm: &'a dyn ChatCompletion,
    pub checker: &'a dyn AnswerChecker,
    pub question_count: usize,
}

impl Interviewer<'_> {
    pub async fn dispatch(
        &self,
        session: &mut Session,
        event: SessionEvent,
    ) -> Result<SessionView, AppError> {
        let directive = match event {
            SessionEvent::SubmitProfile(form) => self.submit_profile(session, form).await?,
            SessionEvent::StartInterview => start_interview(session)?,
            SessionEvent::SubmitAnswer(answer) => self.submit_answer(session, &answer)?,
            SessionEvent::SendChat(message) => self.send_chat(session, &message).await?,
            SessionEvent::EndChat => end_chat(session)?,
        };

        Ok(SessionView::render(session, directive))
    }

    async fn submit_profile(
        &self,
        session: &mut Session,
        form: ProfileSubmission,
    ) -> Result<Directive, AppError> {
        if session.chat_active {
            return Err(AppError::Conflict(
                "Profile cannot be changed while an interview is active".to_string(),
            ));
        }

        let profile = form.into_profile();
        let tech_stack = profile.tech_stack.clone();
        session.set_candidate(profile);

        session.questions =
            generate_technical_questions(self.llm, &tech_stack, self.question_count).await;
        info!(
            "Session {}: profile stored, {} questions ready",
            session.id,
            session.questions.len()
        );

        Ok(Directive::default().notice(Notice::success(SUBMITTED_NOTICE)))
    }

    fn submit_answer(&self, session: &mut Session, answer: &str) -> Result<Directive, AppError> {
        require_phase(session, SessionPhase::Interviewing, "answer a question")?;

        if answer.trim().is_empty() {
            return Ok(Directive::default());
        }

        let question = session.current_question().unwrap_or_default();
        let correct = self.checker.check(question, answer);
        session.advance();

        let notice = if correct {
            Notice::success(CORRECT_NOTICE)
        } else {
            Notice::error(INCORRECT_NOTICE)
        };

        Ok(Directive {
            verdict: Some(correct),
            ..Default::default()
        }
        .notice(notice))
    }

    async fn send_chat(&self, session: &mut Session, message: &str) -> Result<Directive, AppError> {
        require_phase(session, SessionPhase::OpenChat, "chat")?;

        if message.trim().is_empty() {
            return Ok(Directive::default());
        }

        let history = session.context.messages().to_vec();
        session.context.push(Message::user(message));

        let reply = generate_response(self.llm, &history, message).await;
        let mut directive = Directive {
            reply: Some(reply.text().to_string()),
            ..Default::default()
        };

        match reply {
            ChatReply::Answered(text) => session.context.push(Message::assistant(text)),
            ChatReply::Fallback { error, .. } => {
                directive = directive.notice(Notice::error(format!("An error occurred: {error}")));
            }
        }
        debug!(
            "Session {}: context holds {} messages",
            session.id,
            session.context.len()
        );

        Ok(directive)
    }
}

fn start_interview(session: &mut Session) -> Result<Directive, AppError> {
    if session.chat_active {
        return Err(AppError::Conflict("Interview already in progress".to_string()));
    }
    let full_name = match &session.candidate {
        Some(candidate) => candidate.full_name.clone(),
        None => {
            return Err(AppError::Validation(
                "Submit your information before starting the interview".to_string(),
            ))
        }
    };

    session.activate(greeting(&full_name));
    info!("Session {}: interview started", session.id);

    Ok(Directive::default())
}

fn end_chat(session: &mut Session) -> Result<Directive, AppError> {
    require_phase(session, SessionPhase::OpenChat, "end the chat")?;

    let closing = end_conversation(session);
    session.context.push(Message::assistant(closing.clone()));

    Ok(Directive {
        reply: Some(closing),
        ..Default::default()
    })
}

fn require_phase(session: &Session, expected: SessionPhase, action: &str) -> Result<(), AppError> {
    let phase = session.phase();
    if phase != expected {
        return Err(AppError::Conflict(format!("Cannot {action} in phase {phase:?}")));
    }
    Ok(())
}
