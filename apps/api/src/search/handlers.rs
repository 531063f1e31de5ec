//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::{Company, Job};
use crate::search::engine::recommended;
use crate::search::{SearchOutcome, SearchQuery, SearchView};
use crate::state::AppState;

const DEFAULT_RECOMMENDATIONS: usize = 2;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct QuickFilterRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    pub company: Option<Company>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.store.read().await.jobs().to_vec())
}

/// GET /api/v1/jobs/recommended
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecommendedQuery>,
) -> Json<Vec<Job>> {
    let limit = params.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);
    Json(recommended(state.store.read().await.jobs(), limit))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let store = state.store.read().await;
    let job = store.job(&job_id)?;
    Ok(Json(JobDetailResponse {
        company: store.company_of(job).cloned(),
        job: job.clone(),
    }))
}

/// POST /api/v1/jobs/search
///
/// Resolves after the configured delay. `applied` is false when a newer
/// search was issued while this one was waiting.
pub async fn handle_search(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Json<SearchOutcome> {
    let query = SearchQuery::Keyword {
        keyword: request.keyword,
        location: request.location,
    };
    let outcome = state
        .search
        .run(&state.store, query, state.config.search_delay)
        .await;
    Json(outcome)
}

/// POST /api/v1/jobs/quick-filter
pub async fn handle_quick_filter(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuickFilterRequest>,
) -> Json<SearchOutcome> {
    let query = SearchQuery::QuickFilter {
        category: request.category,
    };
    let outcome = state
        .search
        .run(&state.store, query, state.config.quick_filter_delay)
        .await;
    Json(outcome)
}

/// GET /api/v1/jobs/search/results
pub async fn handle_search_results(State(state): State<AppState>) -> Json<SearchView> {
    Json(state.search.snapshot().await)
}

/// DELETE /api/v1/jobs/search
pub async fn handle_reset_search(State(state): State<AppState>) -> Json<SearchView> {
    let all_jobs = state.store.read().await.jobs().to_vec();
    Json(state.search.reset(all_jobs).await)
}
