use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::storage::ResumeStore;

/// Process-local store. Used when no Redis is configured, and in tests.
#[derive(Default)]
pub struct MemoryResumeStore {
    resumes: RwLock<Vec<ResumeData>>,
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn load_all(&self) -> Result<Vec<ResumeData>, AppError> {
        Ok(self.resumes.read().await.clone())
    }

    async fn save_all(&self, resumes: &[ResumeData]) -> Result<(), AppError> {
        *self.resumes.write().await = resumes.to_vec();
        Ok(())
    }
}
