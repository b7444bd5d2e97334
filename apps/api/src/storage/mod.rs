//! Resume persistence: a whole-collection key-value store.
//!
//! The collection is read and written as one value, the way the browser
//! editor keeps it. Read-modify-write is not atomic; the last writer wins.

pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::resume::{new_entity_id, ResumeData};

pub use memory::MemoryResumeStore;
pub use redis_store::RedisResumeStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Every stored resume, in stored order.
    async fn load_all(&self) -> Result<Vec<ResumeData>, AppError>;

    /// Replaces the whole collection.
    async fn save_all(&self, resumes: &[ResumeData]) -> Result<(), AppError>;
}

/// Builds the configured backend: Redis when `REDIS_URL` is set, otherwise an
/// in-process store that is lost on restart.
pub fn connect(config: &Config) -> Result<Arc<dyn ResumeStore>> {
    match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis resume store initialized (key: {})", config.store_key);
            Ok(Arc::new(RedisResumeStore::new(client, config.store_key.clone())))
        }
        None => {
            warn!("REDIS_URL not set; resumes are kept in memory only");
            Ok(Arc::new(MemoryResumeStore::default()))
        }
    }
}

/// Saves one resume into the collection.
///
/// An unsaved resume (id `"new"` or empty) gets a fresh id. `updatedAt` is
/// stamped on every save. An existing id is replaced in place; otherwise the
/// resume is appended.
pub async fn save_resume(
    store: &dyn ResumeStore,
    resume: ResumeData,
) -> Result<ResumeData, AppError> {
    let mut resumes = store.load_all().await?;

    let mut saved = resume;
    if saved.is_unsaved() {
        saved.id = new_entity_id();
    }
    saved.updated_at = Utc::now().to_rfc3339();

    match resumes.iter_mut().find(|r| r.id == saved.id) {
        Some(slot) => *slot = saved.clone(),
        None => resumes.push(saved.clone()),
    }

    store.save_all(&resumes).await?;
    info!("Saved resume {} ({} stored)", saved.id, resumes.len());
    Ok(saved)
}

pub async fn find_resume(
    store: &dyn ResumeStore,
    id: &str,
) -> Result<Option<ResumeData>, AppError> {
    let resumes = store.load_all().await?;
    Ok(resumes.into_iter().find(|r| r.id == id))
}

/// Like [`find_resume`] but a missing id is an error.
pub async fn require_resume(store: &dyn ResumeStore, id: &str) -> Result<ResumeData, AppError> {
    find_resume(store, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// Removes a resume. Returns whether anything was deleted.
pub async fn delete_resume(store: &dyn ResumeStore, id: &str) -> Result<bool, AppError> {
    let mut resumes = store.load_all().await?;
    let before = resumes.len();
    resumes.retain(|r| r.id != id);
    if resumes.len() == before {
        return Ok(false);
    }
    store.save_all(&resumes).await?;
    info!("Deleted resume {id}");
    Ok(true)
}
