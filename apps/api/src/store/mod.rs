//! In-memory mock data store. The only data source of the service.
//!
//! Seeded once at startup from an embedded JSON fixture and validated before
//! use. Jobs, companies and users are read-only; applications change only
//! through `pipeline::transition`.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{Application, Company, Job, User};

const SEED_JSON: &str = include_str!("seed.json");

/// Raw shape of the seed fixture.
#[derive(Debug, Deserialize)]
pub struct Seed {
    pub companies: Vec<Company>,
    pub jobs: Vec<Job>,
    pub users: Vec<User>,
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone)]
pub struct MockStore {
    companies: Vec<Company>,
    jobs: Vec<Job>,
    users: Vec<User>,
    applications: Vec<Application>,
}

impl MockStore {
    /// Builds the store from the embedded fixture.
    pub fn seeded() -> Result<Self> {
        let seed: Seed =
            serde_json::from_str(SEED_JSON).context("Embedded seed fixture is not valid JSON")?;
        let store = Self::from_seed(seed)?;
        info!(
            "Mock store seeded: {} companies, {} jobs, {} users, {} applications",
            store.companies.len(),
            store.jobs.len(),
            store.users.len(),
            store.applications.len()
        );
        Ok(store)
    }

    /// Validates references and history logs, then takes ownership of the seed.
    pub fn from_seed(seed: Seed) -> Result<Self> {
        let company_ids: HashSet<&str> = seed.companies.iter().map(|c| c.id.as_str()).collect();
        let job_ids: HashSet<&str> = seed.jobs.iter().map(|j| j.id.as_str()).collect();
        let user_ids: HashSet<&str> = seed.users.iter().map(|u| u.id.as_str()).collect();

        for job in &seed.jobs {
            if !company_ids.contains(job.company_id.as_str()) {
                bail!("Job {} references unknown company {}", job.id, job.company_id);
            }
        }

        let mut application_ids = HashSet::new();
        for app in &seed.applications {
            if !application_ids.insert(app.id.as_str()) {
                bail!("Duplicate application id {}", app.id);
            }
            if !job_ids.contains(app.job_id.as_str()) {
                bail!("Application {} references unknown job {}", app.id, app.job_id);
            }
            if !user_ids.contains(app.candidate_id.as_str()) {
                bail!(
                    "Application {} references unknown candidate {}",
                    app.id,
                    app.candidate_id
                );
            }
            if !app.is_consistent() {
                bail!(
                    "Application {} history does not end in its current status {}",
                    app.id,
                    app.status
                );
            }
        }

        Ok(Self {
            companies: seed.companies,
            jobs: seed.jobs,
            users: seed.users,
            applications: seed.applications,
        })
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn find_company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn find_job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Owning company of a job, if it is still in the store.
    pub fn company_of(&self, job: &Job) -> Option<&Company> {
        self.find_company(&job.company_id)
    }

    pub fn job(&self, id: &str) -> Result<&Job, AppError> {
        self.find_job(id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }

    pub fn user(&self, id: &str) -> Result<&User, AppError> {
        self.find_user(id)
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }

    pub fn application(&self, id: &str) -> Result<&Application, AppError> {
        self.applications
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
    }

    pub(crate) fn application_mut(&mut self, id: &str) -> Result<&mut Application, AppError> {
        self.applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
    }
}
