//! Chat Responder and conversation lifecycle.

use tracing::{info, warn};

use crate::interview::prompts::{CHAT_FALLBACK, CHAT_SAMPLING, CLOSING_MESSAGE};
use crate::llm_client::ChatCompletion;
use crate::models::message::Message;
use crate::session::Session;

/// Outcome of one chat turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    /// Trimmed model reply; the caller records it as an assistant turn.
    Answered(String),
    /// The remote call failed. `message` is the fixed apology, which the
    /// caller shows but does not record.
    Fallback { message: String, error: String },
}

impl ChatReply {
    pub fn text(&self) -> &str {
        match self {
            ChatReply::Answered(text) => text,
            ChatReply::Fallback { message, .. } => message,
        }
    }
}

/// Sends `history` followed by `user_input` to the completion service.
/// `history` is the context as it was before this turn; the caller is
/// responsible for appending both turns to the session.
pub async fn generate_response(
    llm: &dyn ChatCompletion,
    history: &[Message],
    user_input: &str,
) -> ChatReply {
    let mut messages = history.to_vec();
    messages.push(Message::user(user_input));

    match llm.complete(&messages, CHAT_SAMPLING).await {
        Ok(text) => ChatReply::Answered(text.trim().to_string()),
        Err(e) => {
            warn!("Chat completion failed: {e}");
            ChatReply::Fallback {
                message: CHAT_FALLBACK.to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Ends the conversation and returns the closing message. The caller appends
/// it after the clear, so it becomes the only message in the history.
pub fn end_conversation(session: &mut Session) -> String {
    session.close();
    info!("Session {} ended", session.id);
    CLOSING_MESSAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedCompletion;

    #[tokio::test]
    async fn test_request_is_history_plus_new_user_turn() {
        let llm = ScriptedCompletion::new(vec![Ok("  Sure thing.  \n")]);
        let history = vec![Message::assistant("Welcome"), Message::user("earlier")];

        let reply = generate_response(&llm, &history, "What's next?").await;

        assert_eq!(reply, ChatReply::Answered("Sure thing.".to_string()));
        let (sent, params) = &llm.requests()[0];
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[..2], history[..]);
        assert_eq!(sent[2], Message::user("What's next?"));
        assert_eq!(params.max_tokens, 1024);
        assert_eq!(*params, CHAT_SAMPLING);
    }

    #[tokio::test]
    async fn test_failure_returns_fixed_apology() {
        let llm = ScriptedCompletion::new(vec![Err("boom")]);
        let reply = generate_response(&llm, &[], "hello").await;

        match &reply {
            ChatReply::Fallback { message, error } => {
                assert_eq!(message, CHAT_FALLBACK);
                assert!(error.contains("boom"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert_eq!(reply.text(), CHAT_FALLBACK);
    }

    #[test]
    fn test_end_conversation_deactivates_and_clears() {
        let mut session = Session::new();
        session.chat_active = true;
        session.context.push(Message::user("hi"));

        let closing = end_conversation(&mut session);

        assert_eq!(closing, CLOSING_MESSAGE);
        assert!(!session.chat_active);
        assert!(session.context.is_empty());
    }
}
