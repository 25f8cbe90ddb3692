use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::filter::FilterCriteria;
use business::domain::product::images::ImageBase;
use business::domain::product::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

use crate::api::catalog::dto::{CatalogResponse, ProductResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    images: ImageBase,
}

impl CatalogApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        images: ImageBase,
    ) -> Self {
        Self {
            browse_use_case,
            get_by_id_use_case,
            images,
        }
    }
}

/// Catalog API
///
/// Endpoints for browsing the hot tub catalog with brand and text filters.
#[OpenApi]
impl CatalogApi {
    /// Browse the catalog
    ///
    /// Returns the catalog newest first, narrowed by the optional brand and
    /// search filters, together with the distinct brands for the filter menu.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn browse(
        &self,
        /// Exact brand to filter by
        brand: Query<Option<String>>,
        /// Case-insensitive text to look for in names and descriptions
        search: Query<Option<String>>,
    ) -> BrowseCatalogResponse {
        let view = self
            .browse_use_case
            .execute(BrowseCatalogParams {
                criteria: FilterCriteria::new(brand.0, search.0),
            })
            .await;

        let products = view
            .products
            .into_iter()
            .map(|p| ProductResponse::from_domain(p, &self.images))
            .collect();

        BrowseCatalogResponse::Ok(Json(CatalogResponse {
            products,
            brands: view.brands,
        }))
    }

    /// Get a product by ID
    ///
    /// Returns a single hot tub model by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductByIdResponse::BadRequest(ErrorResponse::validation(
                    "product.invalid_id",
                ));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductResponse::from_domain(
                product,
                &self.images,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
