//! Pipeline board: every application partitioned into one column per status.

use serde::Serialize;

use crate::models::{Application, ApplicationStatus, Job, User};

/// One card on the board. Job and candidate fields are `None` when the
/// reference does not resolve; the card still renders.
#[derive(Debug, Clone, Serialize)]
pub struct BoardCard {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub job_id: String,
    pub job_title: Option<String>,
    pub candidate_id: String,
    pub candidate_name: Option<String>,
    pub candidate_avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: ApplicationStatus,
    pub label: &'static str,
    pub count: usize,
    pub cards: Vec<BoardCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub columns: Vec<BoardColumn>,
}

/// Applications currently in `status`, in source order.
pub fn applications_by_status(
    applications: &[Application],
    status: ApplicationStatus,
) -> Vec<Application> {
    applications
        .iter()
        .filter(|app| app.status == status)
        .cloned()
        .collect()
}

/// Builds the five-column board. A stable partition: each column keeps the
/// source order of its applications. `job_id` narrows the board to one job.
pub fn build_board(
    applications: &[Application],
    jobs: &[Job],
    candidates: &[User],
    job_id: Option<&str>,
) -> PipelineBoard {
    let in_scope: Vec<&Application> = applications
        .iter()
        .filter(|app| job_id.map_or(true, |id| app.job_id == id))
        .collect();

    let columns = ApplicationStatus::ALL
        .into_iter()
        .map(|status| {
            let cards: Vec<BoardCard> = in_scope
                .iter()
                .filter(|app| app.status == status)
                .map(|app| build_card(app, jobs, candidates))
                .collect();
            BoardColumn {
                status,
                label: status.label(),
                count: cards.len(),
                cards,
            }
        })
        .collect();

    PipelineBoard {
        job_id: job_id.map(str::to_string),
        columns,
    }
}

fn build_card(app: &Application, jobs: &[Job], candidates: &[User]) -> BoardCard {
    let job = jobs.iter().find(|j| j.id == app.job_id);
    let candidate = candidates.iter().find(|u| u.id == app.candidate_id);
    BoardCard {
        application_id: app.id.clone(),
        status: app.status,
        job_id: app.job_id.clone(),
        job_title: job.map(|j| j.title.clone()),
        candidate_id: app.candidate_id.clone(),
        candidate_name: candidate.map(|u| u.name.clone()),
        candidate_avatar: candidate.and_then(|u| u.avatar.clone()),
    }
}
