use super::model::Product;

/// Narrowing criteria for the catalog listing.
///
/// Both parts are optional and combined with AND. Absent, empty or
/// whitespace-only parts pass every product, so the default criteria is the
/// identity filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact brand match.
    pub brand: Option<String>,
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn new(brand: Option<String>, search: Option<String>) -> Self {
        Self { brand, search }
    }
}

/// Returns true when the product passes every active criterion.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_brand(product, criteria.brand.as_deref())
        && matches_search(product, criteria.search.as_deref())
}

/// Filters a catalog snapshot, preserving its order.
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches(product, criteria))
        .cloned()
        .collect()
}

/// Derives the brand choices offered alongside the listing.
///
/// Blank and whitespace-only brands are excluded; the rest are trimmed,
/// deduplicated and sorted ascending. Products without a usable brand stay
/// reachable through the empty criteria, they just offer no brand choice.
pub fn distinct_brands(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = products
        .iter()
        .filter_map(|product| product.brand.as_deref())
        .map(str::trim)
        .filter(|brand| !brand.is_empty())
        .map(str::to_string)
        .collect();
    brands.sort();
    brands.dedup();
    brands
}

fn matches_brand(product: &Product, wanted: Option<&str>) -> bool {
    match wanted {
        Some(brand) if !brand.trim().is_empty() => product.brand.as_deref() == Some(brand),
        _ => true,
    }
}

fn matches_search(product: &Product, term: Option<&str>) -> bool {
    let needle = match term {
        Some(term) if !term.trim().is_empty() => term.trim().to_lowercase(),
        _ => return true,
    };
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductRecord;
    use chrono::Utc;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn hot_tub(name: &str, description: &str, brand: Option<&str>) -> Product {
        let now = Utc::now();
        Product::from_repository(ProductRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            price: 8999.0,
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

    fn sample_catalog() -> Vec<Product> {
        vec![
            hot_tub("Cascade 6", "Six seater with cascading waterfall", Some("Acme")),
            hot_tub("Plunge 2", "Compact two person plunge tub", Some("Zeta")),
            hot_tub("Riviera XL", "Luxury lounger with LED lighting", Some("Acme")),
            hot_tub("Nordic Dip", "Cold plunge companion", None),
        ]
    }

    #[test]
    fn should_pass_every_product_with_empty_criteria() {
        let catalog = sample_catalog();
        let filtered = apply(&catalog, &FilterCriteria::default());
        assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn should_match_brand_exactly() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(Some("Acme".to_string()), None);

        let filtered = apply(&catalog, &criteria);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.brand.as_deref() == Some("Acme")));
    }

    #[test]
    fn should_return_empty_when_brand_matches_nothing() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(Some("Nonexistent".to_string()), None);

        assert!(apply(&catalog, &criteria).is_empty());
    }

    #[test]
    fn should_search_name_case_insensitively() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(None, Some("RIVIERA".to_string()));

        let filtered = apply(&catalog, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Riviera XL");
    }

    #[test]
    fn should_search_description_case_insensitively() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(None, Some("led lighting".to_string()));

        let filtered = apply(&catalog, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Riviera XL");
    }

    #[test]
    fn should_combine_brand_and_search_with_and() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(Some("Acme".to_string()), Some("plunge".to_string()));

        // "Plunge 2" matches the search but is a Zeta model.
        assert!(apply(&catalog, &criteria).is_empty());
    }

    #[test]
    fn should_treat_whitespace_criteria_as_absent() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(Some("  ".to_string()), Some("".to_string()));

        assert_eq!(apply(&catalog, &criteria).len(), catalog.len());
    }

    #[test]
    fn should_preserve_catalog_order() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(None, Some("plunge".to_string()));

        let filtered = apply(&catalog, &criteria);

        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Plunge 2", "Nordic Dip"]);
    }

    #[test]
    fn should_keep_unbranded_products_visible_without_brand_criterion() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::new(None, Some("cold".to_string()));

        let filtered = apply(&catalog, &criteria);

        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].brand.is_none());
    }

    #[test]
    fn should_derive_sorted_distinct_brands_excluding_blanks() {
        let catalog = vec![
            hot_tub("A", "", Some("Acme")),
            hot_tub("B", "", Some("")),
            hot_tub("C", "", Some("  ")),
            hot_tub("D", "", Some("Zeta")),
        ];

        assert_eq!(distinct_brands(&catalog), vec!["Acme", "Zeta"]);
    }

    #[test]
    fn should_deduplicate_and_trim_brands() {
        let catalog = vec![
            hot_tub("A", "", Some("Zeta")),
            hot_tub("B", "", Some(" Acme ")),
            hot_tub("C", "", Some("Acme")),
            hot_tub("D", "", None),
        ];

        assert_eq!(distinct_brands(&catalog), vec!["Acme", "Zeta"]);
    }

    proptest! {
        #[test]
        fn empty_criteria_is_the_identity_filter(
            names in proptest::collection::vec("[A-Za-z ]{0,12}", 0..8)
        ) {
            let catalog: Vec<Product> = names
                .iter()
                .map(|name| hot_tub(name, "", None))
                .collect();

            let filtered = apply(&catalog, &FilterCriteria::default());

            let before: Vec<Uuid> = catalog.iter().map(|p| p.id).collect();
            let after: Vec<Uuid> = filtered.iter().map(|p| p.id).collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn filtering_yields_an_ordered_subsequence(
            names in proptest::collection::vec("[a-d]{1,4}", 0..8),
            needle in "[a-d]{1}"
        ) {
            let catalog: Vec<Product> = names
                .iter()
                .map(|name| hot_tub(name, "", None))
                .collect();

            let filtered = apply(&catalog, &FilterCriteria::new(None, Some(needle)));

            let all: Vec<Uuid> = catalog.iter().map(|p| p.id).collect();
            let kept: Vec<Uuid> = filtered.iter().map(|p| p.id).collect();
            let mut cursor = all.iter();
            let is_subsequence = kept.iter().all(|id| cursor.any(|next| next == id));
            prop_assert!(is_subsequence);
        }
    }
}
