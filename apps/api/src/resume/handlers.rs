//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub raw_text: String,
}

/// POST /api/v1/resumes/parse
///
/// Parses resume text and replaces the latest parse result.
/// A failed parse leaves the previous result in place.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<ParseResumeRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let resume = state
        .resume_extractor
        .parse_resume(&request.raw_text)
        .await?;

    *state.latest_resume.write().await = Some(resume.clone());

    Ok(Json(resume))
}

/// GET /api/v1/resumes/latest
pub async fn handle_latest_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeData>, AppError> {
    state
        .latest_resume
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No resume has been parsed yet".to_string()))
}
