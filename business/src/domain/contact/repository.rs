use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ContactMessage;

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn save(&self, message: &ContactMessage) -> Result<(), RepositoryError>;
}
