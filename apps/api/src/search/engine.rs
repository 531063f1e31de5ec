//! Job search and quick filters over the in-memory catalog.
//!
//! Every function here is pure: same inputs, same ordered output.

use crate::models::{Company, Job, JobStatus};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keyword + location search.
///
/// Blank keyword and location return the whole collection. Otherwise a job
/// matches when the keyword is a case-insensitive substring of its title,
/// category or company name, and the location is a substring of its
/// location. A blank side always matches.
pub fn search(jobs: &[Job], companies: &[Company], keyword: &str, location: &str) -> Vec<Job> {
    let keyword = keyword.trim().to_lowercase();
    let location = location.trim().to_lowercase();

    if keyword.is_empty() && location.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .filter(|job| {
            let company_name = companies
                .iter()
                .find(|c| c.id == job.company_id)
                .map(|c| c.name.as_str());

            let keyword_match = contains_ci(&job.title, &keyword)
                || contains_ci(&job.category, &keyword)
                || company_name.is_some_and(|name| contains_ci(name, &keyword));
            let location_match = contains_ci(&job.location, &location);

            keyword_match && location_match
        })
        .cloned()
        .collect()
}

/// Category shortcut: matches category or title only, ignores location.
pub fn quick_filter(jobs: &[Job], category: &str) -> Vec<Job> {
    let category = category.trim().to_lowercase();
    jobs.iter()
        .filter(|job| contains_ci(&job.category, &category) || contains_ci(&job.title, &category))
        .cloned()
        .collect()
}

/// First `limit` open jobs, catalog order.
pub fn recommended(jobs: &[Job], limit: usize) -> Vec<Job> {
    jobs.iter()
        .filter(|job| job.status == JobStatus::Open)
        .take(limit)
        .cloned()
        .collect()
}
