use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the full catalog, newest first.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Resolves a batch of ids in one query. Unknown ids are simply absent
    /// from the result; the order of returned rows is unspecified.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
}
