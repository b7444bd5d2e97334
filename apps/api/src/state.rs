use std::sync::Arc;

use crate::assist::TextGenerator;
use crate::config::Config;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Redis in deployment, in-memory when `REDIS_URL` is unset.
    pub store: Arc<dyn ResumeStore>,
    /// Pluggable writing-assistance backend.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// Empty in-memory store and the offline generator.
    pub fn in_memory() -> Self {
        AppState {
            store: Arc::new(crate::storage::MemoryResumeStore::default()),
            generator: Arc::new(crate::assist::OfflineTextGenerator),
            config: Config::default(),
        }
    }
}
