use serde::Serialize;

use crate::models::{Application, ApplicationStatus, Company, HistoryEntry, Job};

/// Progress bar fill for a status. Presentation only, never stored.
pub fn progress_percent(status: ApplicationStatus) -> u8 {
    match status {
        ApplicationStatus::Applied => 20,
        ApplicationStatus::Screening => 40,
        ApplicationStatus::Interview => 70,
        ApplicationStatus::Offer | ApplicationStatus::Rejected => 100,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub progress_percent: u8,
    /// Oldest first.
    pub entries: Vec<HistoryEntry>,
}

pub fn build_timeline(app: &Application) -> Timeline {
    Timeline {
        application_id: app.id.clone(),
        status: app.status,
        progress_percent: progress_percent(app.status),
        entries: app.history.clone(),
    }
}

/// A candidate-dashboard card: the timeline plus the job it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationOverview {
    pub job_id: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub applied_at: chrono::NaiveDate,
    #[serde(flatten)]
    pub timeline: Timeline,
}

/// All of one candidate's applications, in store order.
///
/// Unresolvable job or company references come back as `None` so one bad
/// reference does not blank the whole dashboard.
pub fn candidate_overview(
    candidate_id: &str,
    applications: &[Application],
    jobs: &[Job],
    companies: &[Company],
) -> Vec<ApplicationOverview> {
    applications
        .iter()
        .filter(|app| app.candidate_id == candidate_id)
        .map(|app| {
            let job = jobs.iter().find(|j| j.id == app.job_id);
            let company =
                job.and_then(|job| companies.iter().find(|c| c.id == job.company_id));
            ApplicationOverview {
                job_id: app.job_id.clone(),
                job_title: job.map(|j| j.title.clone()),
                company_name: company.map(|c| c.name.clone()),
                company_logo: company.map(|c| c.logo.clone()),
                applied_at: app.applied_at,
                timeline: build_timeline(app),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn test_progress_table() {
        assert_eq!(progress_percent(ApplicationStatus::Applied), 20);
        assert_eq!(progress_percent(ApplicationStatus::Screening), 40);
        assert_eq!(progress_percent(ApplicationStatus::Interview), 70);
        assert_eq!(progress_percent(ApplicationStatus::Offer), 100);
        assert_eq!(progress_percent(ApplicationStatus::Rejected), 100);
    }

    #[test]
    fn test_timeline_keeps_log_order() {
        let store = MockStore::seeded().unwrap();
        let timeline = build_timeline(store.application("a1").unwrap());

        assert_eq!(timeline.progress_percent, 70);
        let statuses: Vec<_> = timeline.entries.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                ApplicationStatus::Applied,
                ApplicationStatus::Screening,
                ApplicationStatus::Interview
            ]
        );
        assert_eq!(
            timeline.entries[2].note.as_deref(),
            Some("Strong technical performance.")
        );
    }

    #[test]
    fn test_candidate_overview_resolves_job_and_company() {
        let store = MockStore::seeded().unwrap();
        let overview = candidate_overview(
            "u1",
            store.applications(),
            store.jobs(),
            store.companies(),
        );

        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].job_title.as_deref(), Some("Senior Frontend Engineer"));
        assert_eq!(overview[0].company_name.as_deref(), Some("TechFlow"));
    }

    #[test]
    fn test_candidate_overview_degrades_on_missing_job() {
        let store = MockStore::seeded().unwrap();
        let overview = candidate_overview("u1", store.applications(), &[], store.companies());

        assert_eq!(overview.len(), 1);
        assert!(overview[0].job_title.is_none());
        assert!(overview[0].company_name.is_none());
        assert_eq!(overview[0].timeline.entries.len(), 3);
    }

    #[test]
    fn test_candidate_overview_is_empty_for_other_candidates() {
        let store = MockStore::seeded().unwrap();
        assert!(candidate_overview("u9", store.applications(), store.jobs(), store.companies())
            .is_empty());
    }
}
