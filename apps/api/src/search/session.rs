//! Visible search state with request generations.
//!
//! Each search takes the next generation number when issued. When its
//! simulated delay elapses the result is published only if no newer search
//! (or reset) was issued in the meantime.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::models::Job;
use crate::search::engine;
use crate::store::MockStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchQuery {
    Keyword { keyword: String, location: String },
    QuickFilter { category: String },
}

impl SearchQuery {
    /// A keyword search with nothing in either box.
    pub fn is_blank(&self) -> bool {
        match self {
            SearchQuery::Keyword { keyword, location } => {
                keyword.trim().is_empty() && location.trim().is_empty()
            }
            SearchQuery::QuickFilter { .. } => false,
        }
    }

    pub fn run(&self, store: &MockStore) -> Vec<Job> {
        match self {
            SearchQuery::Keyword { keyword, location } => {
                engine::search(store.jobs(), store.companies(), keyword, location)
            }
            SearchQuery::QuickFilter { category } => engine::quick_filter(store.jobs(), category),
        }
    }
}

/// What the job list currently shows.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    /// Latest issued generation.
    pub generation: u64,
    pub query: Option<SearchQuery>,
    pub is_searching: bool,
    pub is_loading: bool,
    pub jobs: Vec<Job>,
}

/// Result handed back to the caller that issued a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub generation: u64,
    /// False when a newer search superseded this one before it finished.
    pub applied: bool,
    pub jobs: Vec<Job>,
}

pub struct SearchSession {
    view: Mutex<SearchView>,
}

impl SearchSession {
    pub fn new(all_jobs: Vec<Job>) -> Self {
        Self {
            view: Mutex::new(SearchView {
                generation: 0,
                query: None,
                is_searching: false,
                is_loading: false,
                jobs: all_jobs,
            }),
        }
    }

    pub async fn snapshot(&self) -> SearchView {
        self.view.lock().await.clone()
    }

    /// Registers a new search and returns its generation.
    pub async fn begin(&self, query: SearchQuery) -> u64 {
        let mut view = self.view.lock().await;
        view.generation += 1;
        view.query = Some(query);
        view.is_searching = true;
        view.is_loading = true;
        view.generation
    }

    /// Publishes `jobs` if `generation` is still the latest. Returns whether it was applied.
    ///
    /// A blank keyword search leaves search mode once it resolves.
    pub async fn complete(&self, generation: u64, jobs: Vec<Job>) -> bool {
        let mut view = self.view.lock().await;
        if view.generation != generation {
            debug!(
                "Dropping stale search result (generation {generation}, latest {})",
                view.generation
            );
            return false;
        }
        view.jobs = jobs;
        view.is_loading = false;
        if view.query.as_ref().is_some_and(SearchQuery::is_blank) {
            view.is_searching = false;
        }
        true
    }

    /// Clears the query and shows every job. In-flight searches become stale.
    pub async fn reset(&self, all_jobs: Vec<Job>) -> SearchView {
        let mut view = self.view.lock().await;
        view.generation += 1;
        view.query = None;
        view.is_searching = false;
        view.is_loading = false;
        view.jobs = all_jobs;
        view.clone()
    }

    /// Issues `query`, waits `delay`, then evaluates it against the store.
    pub async fn run(
        &self,
        store: &RwLock<MockStore>,
        query: SearchQuery,
        delay: Duration,
    ) -> SearchOutcome {
        let generation = self.begin(query.clone()).await;
        debug!("Search generation {generation} issued: {query:?}");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let jobs = query.run(&*store.read().await);
        let applied = self.complete(generation, jobs.clone()).await;

        SearchOutcome {
            generation,
            applied,
            jobs,
        }
    }
}
