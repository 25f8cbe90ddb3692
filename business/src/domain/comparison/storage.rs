use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionKey;

/// Durable mirror of a session's comparison selection.
///
/// The payload is an opaque string owned by the selection store. Writes are
/// last-writer-wins per session key; there is no conflict detection.
#[async_trait]
pub trait SelectionStorage: Send + Sync {
    async fn load(&self, key: &SessionKey) -> Result<Option<String>, RepositoryError>;
    async fn save(&self, key: &SessionKey, payload: &str) -> Result<(), RepositoryError>;
}
