//! Resume parser: turns raw resume text into a validated `ResumeData`.
//!
//! Pluggable behind `ResumeExtractor`; `AppState` holds an
//! `Arc<dyn ResumeExtractor>`. The default backend is Gemini.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{GeminiClient, LlmError};
use crate::models::ResumeData;
use crate::resume::prompts::{build_resume_prompt, resume_response_schema};

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn parse_resume(&self, raw_text: &str) -> Result<ResumeData, AppError>;
}

pub struct GeminiResumeParser(pub GeminiClient);

#[async_trait]
impl ResumeExtractor for GeminiResumeParser {
    async fn parse_resume(&self, raw_text: &str) -> Result<ResumeData, AppError> {
        if raw_text.trim().is_empty() {
            return Err(AppError::Validation("Resume text cannot be empty".to_string()));
        }

        let prompt = build_resume_prompt(raw_text);
        let value: Value = self
            .0
            .call_json(&prompt, &resume_response_schema())
            .await
            .map_err(map_llm_error)?;

        let resume = decode_resume(value)?;
        info!(
            "Parsed resume: {} skills, {} experience, {} education entries",
            resume.skills.len(),
            resume.experience.len(),
            resume.education.len()
        );
        Ok(resume)
    }
}

/// The upstream schema is a hint, not a guarantee: decode the shape strictly.
pub fn decode_resume(value: Value) -> Result<ResumeData, AppError> {
    if !value.is_object() {
        return Err(AppError::Parse(
            "Resume response is not a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| {
        warn!("Resume response does not match the expected shape: {e}");
        AppError::Parse(format!("Resume response has an unexpected shape: {e}"))
    })
}

fn map_llm_error(err: LlmError) -> AppError {
    match err {
        missing @ LlmError::MissingApiKey => AppError::Configuration(missing.to_string()),
        other => AppError::Parse(format!("Resume parsing failed: {other}")),
    }
}
