use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A hot tub model offered in the storefront catalog.
///
/// Catalog rows are managed by an external back office and only read here,
/// so the aggregate has no validating constructor. Row-level sanity checks
/// happen at the repository boundary.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub brand: Option<String>,
    pub rating: Option<f64>,
    pub seating_capacity: Option<i32>,
    pub jet_count: Option<i32>,
    pub color_options: Option<String>,
    pub dimensions: Option<String>,
    pub warranty_years: Option<i32>,
    pub storage_path: Option<String>,
    pub gallery_paths: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub brand: Option<String>,
    pub rating: Option<f64>,
    pub seating_capacity: Option<i32>,
    pub jet_count: Option<i32>,
    pub color_options: Option<String>,
    pub dimensions: Option<String>,
    pub warranty_years: Option<i32>,
    pub storage_path: Option<String>,
    pub gallery_paths: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            brand: record.brand,
            rating: record.rating,
            seating_capacity: record.seating_capacity,
            jet_count: record.jet_count,
            color_options: record.color_options,
            dimensions: record.dimensions,
            warranty_years: record.warranty_years,
            storage_path: record.storage_path,
            gallery_paths: record.gallery_paths,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
