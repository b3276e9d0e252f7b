//! Axum route handlers. Each one is a linear, fail-fast pipeline over the
//! fetcher, extractor, prompt builder, generation client, and sanitizer.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::extractor::extract_text;
use crate::fetcher::fetch_document;
use crate::llm_client::prompts::{build_builder_prompt, build_evaluation_prompt};
use crate::models::StructuredResumeInput;
use crate::parsing::{parse_resume, LocalParseResult};
use crate::sanitizer::sanitize_response;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PdfUrlQuery {
    pub pdf_url: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub status: &'static str,
    pub parsed_data: LocalParseResult,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResumeResponse {
    pub status: &'static str,
    pub parsed_data: Value,
}

#[derive(Debug, Serialize)]
pub struct ResumeBuilderResponse {
    pub status: &'static str,
    pub resume_content: Value,
    pub input_data: StructuredResumeInput,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Liveness/identity message; no semantics beyond confirming reachability.
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "resume-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /api/parse-resume?pdf_url=<url>
///
/// Fetch → extract → local regex parse. No generation call is made.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Query(params): Query<PdfUrlQuery>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let text = fetch_and_extract(&state, &params.pdf_url).await?;

    let parsed_data = parse_resume(&text, &state.config.skill_vocabulary);

    Ok(Json(ParseResumeResponse {
        status: "success",
        parsed_data,
    }))
}

/// GET /api/evaluate-resume?pdf_url=<url>
///
/// Fetch → extract → evaluation prompt → generation → sanitize. The parsed
/// value is whatever object the model produced; no schema is enforced.
pub async fn handle_evaluate_resume(
    State(state): State<AppState>,
    Query(params): Query<PdfUrlQuery>,
) -> Result<Json<EvaluateResumeResponse>, AppError> {
    let text = fetch_and_extract(&state, &params.pdf_url).await?;

    let prompt = build_evaluation_prompt(&text);
    let raw = state.llm.generate(&prompt).await?;
    let parsed_data = sanitize_response(&raw)?;

    Ok(Json(EvaluateResumeResponse {
        status: "success",
        parsed_data,
    }))
}

/// POST /api/ai-resume-builder
///
/// Validate structured input → builder prompt → generation → sanitize.
/// The normalized input is echoed back alongside the generated content.
pub async fn handle_resume_builder(
    State(state): State<AppState>,
    Json(input): Json<StructuredResumeInput>,
) -> Result<Json<ResumeBuilderResponse>, AppError> {
    let input = input.validate_and_normalize()?;

    let prompt = build_builder_prompt(&input);
    let raw = state.llm.generate(&prompt).await?;
    let resume_content = sanitize_response(&raw)?;

    Ok(Json(ResumeBuilderResponse {
        status: "success",
        resume_content,
        input_data: input,
    }))
}

/// Shared front half of both PDF pipelines. Fails before extraction when the
/// fetch fails, so a 404 upstream never reaches the PDF parser.
async fn fetch_and_extract(state: &AppState, pdf_url: &str) -> Result<String, AppError> {
    if pdf_url.trim().is_empty() {
        return Err(AppError::Validation("pdf_url cannot be empty".to_string()));
    }

    let bytes = fetch_document(&state.http, pdf_url).await?;
    info!("Fetched {} bytes from {pdf_url}", bytes.len());

    extract_text(bytes).await
}
