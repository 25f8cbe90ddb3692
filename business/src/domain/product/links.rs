use url::form_urlencoded;
use uuid::Uuid;

use super::model::Product;

/// Storefront path of the product detail page.
pub fn detail_path(id: Uuid) -> String {
    format!("/models/{}", id)
}

/// Storefront path of the showroom booking form, pre-filled with the model
/// name the visitor was looking at.
pub fn booking_path(product: &Product) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("model", &product.name)
        .finish();
    format!("/book-visit?{}", query)
}

/// Storefront path of the comparison page for the given selection.
/// Uuid ids need no percent-encoding, so the comma separators stay readable.
pub fn comparison_path(ids: &[Uuid]) -> String {
    let joined = ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("/compare?ids={}", joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductRecord;
    use chrono::Utc;

    fn named_product(name: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(ProductRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price: 0.0,
            brand: None,
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

    #[test]
    fn should_build_detail_path_from_id() {
        let id = Uuid::new_v4();
        assert_eq!(detail_path(id), format!("/models/{}", id));
    }

    #[test]
    fn should_encode_model_name_in_booking_path() {
        let product = named_product("Cascade 6");
        assert_eq!(booking_path(&product), "/book-visit?model=Cascade+6");
    }

    #[test]
    fn should_encode_reserved_characters_in_booking_path() {
        let product = named_product("Surf & Soak");
        assert_eq!(booking_path(&product), "/book-visit?model=Surf+%26+Soak");
    }

    #[test]
    fn should_join_comparison_ids_with_commas() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        assert_eq!(
            comparison_path(&[first, second]),
            format!("/compare?ids={},{}", first, second)
        );
    }
}
