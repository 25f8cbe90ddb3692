use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Loading catalog product {}", params.id));

        match self.repository.find_by_id(params.id).await {
            Ok(product) => Ok(product),
            Err(RepositoryError::NotFound) => {
                // A miss here usually means a stale link rather than a bug.
                self.logger
                    .warn(&format!("Catalog product {} not found", params.id));
                Err(ProductError::NotFound)
            }
            Err(other) => Err(ProductError::Repository(other)),
        }
    }
}
