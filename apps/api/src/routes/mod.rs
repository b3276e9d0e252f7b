pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/api/parse-resume", get(handlers::handle_parse_resume))
        .route("/api/evaluate-resume", get(handlers::handle_evaluate_resume))
        .route("/api/ai-resume-builder", post(handlers::handle_resume_builder))
        .with_state(state)
}
