pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/tech-stack",
            get(handlers::handle_tech_stack_options),
        )
        // Session API: one route per user action
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            post(handlers::handle_submit_profile),
        )
        .route(
            "/api/v1/sessions/:id/start",
            post(handlers::handle_start_interview),
        )
        .route(
            "/api/v1/sessions/:id/answer",
            post(handlers::handle_submit_answer),
        )
        .route("/api/v1/sessions/:id/chat", post(handlers::handle_send_chat))
        .route("/api/v1/sessions/:id/end", post(handlers::handle_end_chat))
        .with_state(state)
}
