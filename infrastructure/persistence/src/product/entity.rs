use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductRecord};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub brand: Option<String>,
    pub rating: Option<BigDecimal>,
    pub seating_capacity: Option<i32>,
    pub jet_count: Option<i32>,
    pub color_options: Option<String>,
    pub dimensions: Option<String>,
    pub warranty_years: Option<i32>,
    pub storage_path: Option<String>,
    pub gallery_paths: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    /// Converts the row into a domain product.
    ///
    /// The catalog table is written by an external back office, so the row is
    /// checked here instead of in a domain constructor. A row without a usable
    /// name is dropped; out-of-range numbers are clamped rather than rejected
    /// so one sloppy row never empties the listing.
    pub fn into_domain(self) -> Option<Product> {
        let name = self.name.trim();
        if name.is_empty() {
            tracing::warn!("Skipping catalog row {}: empty name", self.id);
            return None;
        }

        let price = self.price.to_f64().unwrap_or(0.0).max(0.0);
        let rating = self
            .rating
            .and_then(|r| r.to_f64())
            .map(|r| r.clamp(0.0, 5.0));

        Some(Product::from_repository(ProductRecord {
            id: self.id,
            name: name.to_string(),
            description: self.description.unwrap_or_default(),
            price,
            brand: self.brand,
            rating,
            seating_capacity: self.seating_capacity.map(|v| v.max(0)),
            jet_count: self.jet_count.map(|v| v.max(0)),
            color_options: self.color_options,
            dimensions: self.dimensions,
            warranty_years: self.warranty_years.map(|v| v.max(0)),
            storage_path: self.storage_path,
            gallery_paths: self.gallery_paths.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}
