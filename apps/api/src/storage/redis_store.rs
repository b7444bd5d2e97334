use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::storage::ResumeStore;

/// Default key holding the JSON array of resumes.
pub const DEFAULT_STORE_KEY: &str = "jioresume_resumes";

/// Keeps the whole collection as one JSON string under a single key.
pub struct RedisResumeStore {
    client: redis::Client,
    key: String,
}

impl RedisResumeStore {
    pub fn new(client: redis::Client, key: String) -> Self {
        Self { client, key }
    }
}

#[async_trait]
impl ResumeStore for RedisResumeStore {
    async fn load_all(&self) -> Result<Vec<ResumeData>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(self.key.as_str()).await?;
        let resumes = match raw {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        debug!("Loaded {} resumes from {}", resumes.len(), self.key);
        Ok(resumes)
    }

    async fn save_all(&self, resumes: &[ResumeData]) -> Result<(), AppError> {
        let json = serde_json::to_string(resumes)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(self.key.as_str(), json).await?;
        debug!("Wrote {} resumes to {}", resumes.len(), self.key);
        Ok(())
    }
}
