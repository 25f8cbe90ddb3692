use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comparison::sheet;
use crate::domain::comparison::use_cases::build_sheet::{
    CompareProductsParams, CompareProductsUseCase, ComparisonView,
};
use crate::domain::logger::Logger;
use crate::domain::product::images::ImageBase;
use crate::domain::product::repository::ProductRepository;

pub struct CompareProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub images: ImageBase,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompareProductsUseCase for CompareProductsUseCaseImpl {
    async fn execute(&self, params: CompareProductsParams) -> ComparisonView {
        let ids = sheet::parse_ids(&params.raw_ids);
        if ids.is_empty() {
            // Nothing usable was requested, so nothing is fetched.
            return ComparisonView::NothingSelected;
        }

        self.logger
            .info(&format!("Comparing {} requested products", ids.len()));

        let products = match self.repository.find_by_ids(&ids).await {
            Ok(products) => products,
            Err(error) => {
                self.logger
                    .error(&format!("Comparison read failed: {}", error));
                return ComparisonView::NoMatches;
            }
        };

        if products.is_empty() {
            return ComparisonView::NoMatches;
        }

        let ordered = sheet::order_by_request(&ids, products);
        ComparisonView::Sheet(sheet::build_sheet(&ordered, &self.images))
    }
}
