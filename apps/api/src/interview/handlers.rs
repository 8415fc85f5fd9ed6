//! Axum route handlers for the screening session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::flow::{Interviewer, SessionEvent};
use crate::interview::view::{Directive, SessionView};
use crate::models::candidate::{ProfileSubmission, TECH_STACK_OPTIONS};
use crate::session::store::SessionHandle;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tech-stack
pub async fn handle_tech_stack_options() -> Json<Vec<&'static str>> {
    Json(TECH_STACK_OPTIONS.to_vec())
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let handle = state.sessions.create().await;
    let session = handle.lock().await;
    (
        StatusCode::CREATED,
        Json(SessionView::render(&session, Directive::default())),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.touch();
    Ok(Json(SessionView::render(&session, Directive::default())))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/sessions/:id/profile
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<ProfileSubmission>,
) -> Result<Json<SessionView>, AppError> {
    dispatch(&state, id, SessionEvent::SubmitProfile(form)).await
}

/// POST /api/v1/sessions/:id/start
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    dispatch(&state, id, SessionEvent::StartInterview).await
}

/// POST /api/v1/sessions/:id/answer
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    dispatch(&state, id, SessionEvent::SubmitAnswer(request.answer)).await
}

/// POST /api/v1/sessions/:id/chat
pub async fn handle_send_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<SessionView>, AppError> {
    dispatch(&state, id, SessionEvent::SendChat(request.message)).await
}

/// POST /api/v1/sessions/:id/end
pub async fn handle_end_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    dispatch(&state, id, SessionEvent::EndChat).await
}

async fn dispatch(
    state: &AppState,
    id: Uuid,
    event: SessionEvent,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(state, id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let interviewer = Interviewer {
        llm: state.llm.as_ref(),
        checker: state.checker.as_ref(),
        question_count: state.config.question_count,
    };

    let view = interviewer.dispatch(&mut session, event).await?;
    Ok(Json(view))
}

async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state.sessions.get(id).await.ok_or_else(|| not_found(id))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
