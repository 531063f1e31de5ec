//! Axum route handlers for the Applications / Pipeline API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::{Application, ApplicationStatus};
use crate::pipeline::{
    applications_by_status, build_board, build_timeline, candidate_overview, transition,
    ApplicationOverview, PipelineBoard, Timeline,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub job_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub status: ApplicationStatus,
    pub note: Option<String>,
}

/// GET /api/v1/applications?status=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<StatusQuery>,
) -> Json<Vec<Application>> {
    let store = state.store.read().await;
    let applications = match params.status {
        Some(status) => applications_by_status(store.applications(), status),
        None => store.applications().to_vec(),
    };
    Json(applications)
}

/// GET /api/v1/applications/:id/timeline
pub async fn handle_timeline(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<Timeline>, AppError> {
    let store = state.store.read().await;
    let app = store.application(&application_id)?;
    Ok(Json(build_timeline(app)))
}

/// POST /api/v1/applications/:id/transition
pub async fn handle_transition(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
    AppJson(request): AppJson<TransitionRequest>,
) -> Result<Json<Application>, AppError> {
    let mut store = state.store.write().await;
    let updated = transition(
        &mut store,
        &application_id,
        request.status,
        request.note,
        state.config.transition_policy,
    )?;
    Ok(Json(updated))
}

/// GET /api/v1/pipeline/board?job_id=
pub async fn handle_board(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<BoardQuery>,
) -> Result<Json<PipelineBoard>, AppError> {
    let store = state.store.read().await;
    let job_id = params.job_id.as_deref().filter(|id| !id.is_empty());
    if let Some(id) = job_id {
        store.job(id)?;
    }
    Ok(Json(build_board(
        store.applications(),
        store.jobs(),
        store.users(),
        job_id,
    )))
}

/// GET /api/v1/candidates/:id/applications
pub async fn handle_candidate_applications(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Vec<ApplicationOverview>>, AppError> {
    let store = state.store.read().await;
    store.user(&candidate_id)?;
    Ok(Json(candidate_overview(
        &candidate_id,
        store.applications(),
        store.jobs(),
        store.companies(),
    )))
}
