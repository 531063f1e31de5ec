use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Remote,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    Closed,
    Pending,
}

/// A job listing. Listings are never mutated once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    /// Display string, e.g. "$140k - $180k".
    pub salary: String,
    pub job_type: JobType,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_at: NaiveDate,
    pub status: JobStatus,
}
