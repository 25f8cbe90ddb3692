use async_trait::async_trait;

use crate::domain::comparison::sheet::ComparisonSheet;

pub struct CompareProductsParams {
    /// The raw `ids` query value of the comparison page, comma separated.
    pub raw_ids: String,
}

/// Outcome of resolving a comparison request.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonView {
    /// The request named no usable ids; nothing was fetched.
    NothingSelected,
    /// Ids were requested but none resolved to a product.
    NoMatches,
    Sheet(ComparisonSheet),
}

/// Comparison resolution is infallible by contract: a broken catalog read
/// degrades to the no-matches state instead of an error page.
#[async_trait]
pub trait CompareProductsUseCase: Send + Sync {
    async fn execute(&self, params: CompareProductsParams) -> ComparisonView;
}
