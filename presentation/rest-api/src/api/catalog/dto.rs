use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::images::ImageBase;
use business::domain::product::links;
use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Model name
    pub name: String,
    /// Marketing description
    pub description: String,
    /// Price in the store currency
    pub price: f64,
    /// Manufacturer brand
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Average review rating (0 to 5)
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f64>,
    /// Number of seats
    #[oai(skip_serializing_if_is_none)]
    pub seating_capacity: Option<i32>,
    /// Number of jets
    #[oai(skip_serializing_if_is_none)]
    pub jet_count: Option<i32>,
    /// Available shell colors
    #[oai(skip_serializing_if_is_none)]
    pub color_options: Option<String>,
    /// Outer dimensions
    #[oai(skip_serializing_if_is_none)]
    pub dimensions: Option<String>,
    /// Warranty length in years
    #[oai(skip_serializing_if_is_none)]
    pub warranty_years: Option<i32>,
    /// Resolved primary image URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Resolved gallery image URLs
    pub gallery_urls: Vec<String>,
    /// Storefront detail page path
    pub detail_path: String,
    /// Showroom booking path prefilled with this model
    pub booking_path: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ProductResponse {
    pub fn from_domain(product: Product, images: &ImageBase) -> Self {
        Self {
            id: product.id.to_string(),
            detail_path: links::detail_path(product.id),
            booking_path: links::booking_path(&product),
            image_url: images.resolve(product.storage_path.as_deref()),
            gallery_urls: images.resolve_many(&product.gallery_paths),
            name: product.name,
            description: product.description,
            price: product.price,
            brand: product.brand,
            rating: product.rating,
            seating_capacity: product.seating_capacity,
            jet_count: product.jet_count,
            color_options: product.color_options,
            dimensions: product.dimensions,
            warranty_years: product.warranty_years,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    /// Products matching the active filters, newest first
    pub products: Vec<ProductResponse>,
    /// Every distinct brand in the catalog, for the filter menu
    pub brands: Vec<String>,
}
