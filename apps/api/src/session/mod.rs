//! Explicit session state: the active role and what it may navigate to.
//!
//! The role is switchable at runtime. There is no authentication; the
//! signed-in user is the seeded demo candidate.

pub mod handlers;

use serde::Serialize;

use crate::models::UserRole;

/// Id of the demo user every session is signed in as.
pub const DEMO_USER_ID: &str = "u1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: UserRole,
    pub user_id: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            role: UserRole::Candidate,
            user_id: DEMO_USER_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardKind {
    Candidate,
    EmployerPipeline,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const NAV_ITEMS: &[(&str, &str, &[UserRole])] = &[
    ("Find Jobs", "/", &[UserRole::Candidate, UserRole::Admin]),
    ("Dashboard", "/dashboard", &[UserRole::Candidate, UserRole::Employer]),
    ("ATS", "/ats", &[UserRole::Employer, UserRole::Admin]),
    ("Applications", "/my-applications", &[UserRole::Candidate]),
];

pub fn navigation_for(role: UserRole) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|(_, _, roles)| roles.contains(&role))
        .map(|&(label, path, _)| NavItem { label, path })
        .collect()
}

pub fn dashboard_for(role: UserRole) -> DashboardKind {
    match role {
        UserRole::Candidate => DashboardKind::Candidate,
        UserRole::Employer | UserRole::Admin => DashboardKind::EmployerPipeline,
    }
}
