use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::ResumeData;
use crate::resume::ResumeExtractor;
use crate::search::SearchSession;
use crate::session::Session;
use crate::store::MockStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Owns every piece of mutable state; handlers only reach it through here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Applications change under the write lock, one transition at a time.
    pub store: Arc<RwLock<MockStore>>,
    pub search: Arc<SearchSession>,
    pub session: Arc<RwLock<Session>>,
    /// Latest successful parse; replaced, never merged.
    pub latest_resume: Arc<RwLock<Option<ResumeData>>>,
    /// Pluggable resume parser. Default: Gemini.
    pub resume_extractor: Arc<dyn ResumeExtractor>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: MockStore,
        resume_extractor: Arc<dyn ResumeExtractor>,
    ) -> Self {
        let search = SearchSession::new(store.jobs().to_vec());
        Self {
            config,
            store: Arc::new(RwLock::new(store)),
            search: Arc::new(search),
            session: Arc::new(RwLock::new(Session::default())),
            latest_resume: Arc::new(RwLock::new(None)),
            resume_extractor,
        }
    }
}
