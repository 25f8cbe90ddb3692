use async_trait::async_trait;

use crate::domain::product::filter::FilterCriteria;
use crate::domain::product::model::Product;

pub struct BrowseCatalogParams {
    pub criteria: FilterCriteria,
}

/// The catalog listing as the storefront renders it: the filtered products
/// plus the brand choices derived from the full snapshot.
pub struct CatalogView {
    pub products: Vec<Product>,
    pub brands: Vec<String>,
}

/// Browsing is infallible by contract: a broken catalog read degrades to an
/// empty listing instead of an error page.
#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self, params: BrowseCatalogParams) -> CatalogView;
}
