//! Status transitions and the policy that decides which ones are allowed.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{Application, ApplicationStatus, HistoryEntry};
use crate::store::MockStore;

/// Which status changes an operator may make.
///
/// Re-recording the current status is allowed under every policy and always
/// appends a new history entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status to any status.
    #[default]
    Unrestricted,
    /// Nothing leaves `REJECTED`.
    RejectedTerminal,
    /// `RejectedTerminal`, and no moving back along Applied → Offer.
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn allows(&self, from: ApplicationStatus, to: ApplicationStatus) -> bool {
        if from == to {
            return true;
        }
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::RejectedTerminal => from != ApplicationStatus::Rejected,
            TransitionPolicy::ForwardOnly => match (stage(from), stage(to)) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(a), Some(b)) => b > a,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPolicy::Unrestricted => "unrestricted",
            TransitionPolicy::RejectedTerminal => "rejected_terminal",
            TransitionPolicy::ForwardOnly => "forward_only",
        }
    }
}

/// Position on the happy path; `None` for `REJECTED`.
fn stage(status: ApplicationStatus) -> Option<u8> {
    match status {
        ApplicationStatus::Applied => Some(0),
        ApplicationStatus::Screening => Some(1),
        ApplicationStatus::Interview => Some(2),
        ApplicationStatus::Offer => Some(3),
        ApplicationStatus::Rejected => None,
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "unrestricted" | "any" => Ok(TransitionPolicy::Unrestricted),
            "rejected_terminal" => Ok(TransitionPolicy::RejectedTerminal),
            "forward_only" => Ok(TransitionPolicy::ForwardOnly),
            other => Err(anyhow::anyhow!(
                "expected one of unrestricted, rejected_terminal, forward_only; got '{other}'"
            )),
        }
    }
}

/// Moves one application to `new_status` and appends the matching history entry.
///
/// Both fields change together under the caller's `&mut` borrow, so no reader
/// can see the status and the last log entry disagree.
pub fn apply_transition(
    app: &mut Application,
    new_status: ApplicationStatus,
    note: Option<String>,
    today: NaiveDate,
    policy: TransitionPolicy,
) -> Result<(), AppError> {
    if !policy.allows(app.status, new_status) {
        return Err(AppError::InvalidTransition(format!(
            "{} cannot move from {} to {} under the {} policy",
            app.id, app.status, new_status, policy
        )));
    }

    let note = note.filter(|n| !n.trim().is_empty());
    app.history.push(HistoryEntry {
        status: new_status,
        updated_at: today,
        note,
    });
    app.status = new_status;
    Ok(())
}

/// `transition(application_id, new_status, note)` against the store, dated today (UTC).
pub fn transition(
    store: &mut MockStore,
    application_id: &str,
    new_status: ApplicationStatus,
    note: Option<String>,
    policy: TransitionPolicy,
) -> Result<Application, AppError> {
    let app = store.application_mut(application_id)?;
    let from = app.status;
    apply_transition(app, new_status, note, Utc::now().date_naive(), policy)?;

    info!(
        "Application {application_id} moved {from} -> {new_status} ({} history entries)",
        app.history.len()
    );
    Ok(app.clone())
}
