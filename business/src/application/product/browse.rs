use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::filter;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::browse::{
    BrowseCatalogParams, BrowseCatalogUseCase, CatalogView,
};

pub struct BrowseCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self, params: BrowseCatalogParams) -> CatalogView {
        self.logger.info("Browsing catalog");

        let snapshot = match self.repository.find_all().await {
            Ok(products) => products,
            Err(error) => {
                self.logger.error(&format!(
                    "Catalog read failed, serving empty listing: {}",
                    error
                ));
                Vec::new()
            }
        };

        // Brand choices come from the full snapshot, not the filtered view,
        // so picking a brand never erases the other options.
        let brands = filter::distinct_brands(&snapshot);
        let products = filter::apply(&snapshot, &params.criteria);

        self.logger.info(&format!(
            "Listing {} of {} products",
            products.len(),
            snapshot.len()
        ));

        CatalogView { products, brands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::filter::FilterCriteria;
    use crate::domain::product::model::{Product, ProductRecord};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn hot_tub(name: &str, brand: Option<&str>) -> Product {
        let now = Utc::now();
        Product::from_repository(ProductRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price: 9999.0,
            brand: brand.map(str::to_string),
            rating: None,
            seating_capacity: None,
            jet_count: None,
            color_options: None,
            dimensions: None,
            warranty_years: None,
            storage_path: None,
            gallery_paths: vec![],
            created_at: now,
            updated_at: now,
        })
    }

    #[tokio::test]
    async fn should_list_everything_with_default_criteria() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_all().returning(|| {
            Ok(vec![
                hot_tub("Cascade 6", Some("Acme")),
                hot_tub("Plunge 2", Some("Zeta")),
            ])
        });

        let use_case = BrowseCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(BrowseCatalogParams {
                criteria: FilterCriteria::default(),
            })
            .await;

        assert_eq!(view.products.len(), 2);
        assert_eq!(view.brands, vec!["Acme", "Zeta"]);
    }

    #[tokio::test]
    async fn should_derive_brands_from_full_snapshot_not_filtered_view() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_all().returning(|| {
            Ok(vec![
                hot_tub("Cascade 6", Some("Acme")),
                hot_tub("Plunge 2", Some("Zeta")),
            ])
        });

        let use_case = BrowseCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(BrowseCatalogParams {
                criteria: FilterCriteria::new(Some("Acme".to_string()), None),
            })
            .await;

        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].name, "Cascade 6");
        assert_eq!(view.brands, vec!["Acme", "Zeta"]);
    }

    #[tokio::test]
    async fn should_serve_empty_listing_when_repository_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = BrowseCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(BrowseCatalogParams {
                criteria: FilterCriteria::default(),
            })
            .await;

        assert!(view.products.is_empty());
        assert!(view.brands.is_empty());
    }
}
