use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Board column order.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Screening => "Screening",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::Screening => "SCREENING",
            ApplicationStatus::Interview => "INTERVIEW",
            ApplicationStatus::Offer => "OFFER",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an application's append-only status log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub status: ApplicationStatus,
    pub updated_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub status: ApplicationStatus,
    pub applied_at: NaiveDate,
    pub resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Oldest first. Only ever appended to.
    pub history: Vec<HistoryEntry>,
}

impl Application {
    /// True when the last history entry agrees with the current status.
    pub fn is_consistent(&self) -> bool {
        self.history
            .last()
            .is_some_and(|last| last.status == self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_wire_form_is_strict() {
        let offer: ApplicationStatus = serde_json::from_str("\"OFFER\"").unwrap();
        assert_eq!(offer, ApplicationStatus::Offer);
        assert!(serde_json::from_str::<ApplicationStatus>("\"Offer\"").is_err());
        assert!(serde_json::from_str::<ApplicationStatus>("\"HIRED\"").is_err());
    }

    #[test]
    fn test_status_serde_matches_display() {
        for status in ApplicationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_consistency_checks_last_entry() {
        let mut app = Application {
            id: "a9".to_string(),
            job_id: "j1".to_string(),
            candidate_id: "u1".to_string(),
            status: ApplicationStatus::Screening,
            applied_at: date(2023, 11, 1),
            resume_url: "resume.pdf".to_string(),
            notes: None,
            history: vec![HistoryEntry {
                status: ApplicationStatus::Applied,
                updated_at: date(2023, 11, 1),
                note: None,
            }],
        };
        assert!(!app.is_consistent());

        app.status = ApplicationStatus::Applied;
        assert!(app.is_consistent());

        app.history.clear();
        assert!(!app.is_consistent());
    }
}
