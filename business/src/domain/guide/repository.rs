use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ChatLogEntry;

#[async_trait]
pub trait ChatLogRepository: Send + Sync {
    async fn save(&self, entry: &ChatLogEntry) -> Result<(), RepositoryError>;
}
