// Screening flow: question generation, answer checking, open chat, and the
// event dispatch that ties them to a session.
// All completion calls go through llm_client, never direct HTTP calls here.

pub mod chat;
pub mod checker;
pub mod flow;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod view;
