use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::product::images::ImageBase;
use crate::domain::product::links;
use crate::domain::product::model::Product;

/// Placeholder rendered for attributes a model does not declare.
pub const MISSING_VALUE: &str = "—";

/// One column of the comparison table plus everything its header card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCard {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub brand: Option<String>,
    pub price_label: String,
    pub rating_label: Option<String>,
    pub image_url: Option<String>,
    pub detail_path: String,
    pub booking_path: String,
}

/// One feature row: a label and one value per card, in card order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSheet {
    pub cards: Vec<ComparisonCard>,
    pub features: Vec<FeatureRow>,
}

/// Decodes the comma-separated id list carried by the comparison page URL.
/// Entries are trimmed, blanks discarded and malformed ids dropped without
/// complaint. Duplicates survive decoding; resolution collapses them later.
pub fn parse_ids(raw: &str) -> Vec<Uuid> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| Uuid::parse_str(entry).ok())
        .collect()
}

/// Orders resolved products by the first occurrence of their id in the
/// requested list. Duplicate requests collapse to a single column; ids that
/// resolved to nothing simply produce none.
pub fn order_by_request(ids: &[Uuid], products: Vec<Product>) -> Vec<Product> {
    let mut by_id: HashMap<Uuid, Product> = products
        .into_iter()
        .map(|product| (product.id, product))
        .collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

/// Assembles the comparison sheet: one card per product and the fixed
/// feature rows, in their fixed order.
pub fn build_sheet(products: &[Product], images: &ImageBase) -> ComparisonSheet {
    let cards = products
        .iter()
        .map(|product| ComparisonCard {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            price_label: format_price(product.price),
            rating_label: product.rating.map(format_rating),
            image_url: images.resolve(product.storage_path.as_deref()),
            detail_path: links::detail_path(product.id),
            booking_path: links::booking_path(product),
        })
        .collect();

    let features = vec![
        row("Price", products, |p| Some(format_price(p.price))),
        row("Rating", products, |p| p.rating.map(format_rating)),
        row("Seating Capacity", products, |p| {
            p.seating_capacity.map(|v| v.to_string())
        }),
        row("Jet Count", products, |p| p.jet_count.map(|v| v.to_string())),
        row("Color Options", products, |p| text(p.color_options.as_deref())),
        row("Dimensions", products, |p| text(p.dimensions.as_deref())),
        row("Warranty (years)", products, |p| {
            p.warranty_years.map(|v| v.to_string())
        }),
    ];

    ComparisonSheet { cards, features }
}

/// Formats a price with thousands separators. Whole amounts drop the
/// fraction entirely; anything else keeps exactly two decimals.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();
    let grouped = group_thousands(whole);
    if fraction == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, fraction)
    }
}

/// Formats a rating with exactly one decimal.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

fn row(
    label: &str,
    products: &[Product],
    value: impl Fn(&Product) -> Option<String>,
) -> FeatureRow {
    FeatureRow {
        label: label.to_string(),
        values: products
            .iter()
            .map(|product| value(product).unwrap_or_else(|| MISSING_VALUE.to_string()))
            .collect(),
    }
}

fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductRecord;
    use chrono::Utc;

    fn images() -> ImageBase {
        ImageBase::new("https://cdn.example.com/public", "hot-tubs")
    }

    fn full_product() -> Product {
        let now = Utc::now();
        Product::from_repository(ProductRecord {
            id: Uuid::new_v4(),
            name: "Cascade 6".to_string(),
            description: "Six seater with cascading waterfall".to_string(),
            price: 12345.0,
            brand: Some("Acme".to_string()),
            rating: Some(4.5),
            seating_capacity: Some(6),
            jet_count: Some(48),
            color_options: Some("Slate, Pearl".to_string()),
            dimensions: Some("220 x 220 x 90 cm".to_string()),
            warranty_years: Some(5),
            storage_path: Some("cascade-6/front.jpg".to_string()),
            gallery_paths: vec![],
            created_at: now,
            updated_at: now,
        })
    }

    fn bare_product() -> Product {
        let now = Utc::now();
        Product::from_repository(ProductRecord {
            id: Uuid::new_v4(),
            name: "Mystery Tub".to_string(),
            description: String::new(),
            price: 7999.5,
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
    fn should_split_trim_and_drop_blank_entries() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let raw = format!(" {} , ,{},", first, second);

        assert_eq!(parse_ids(&raw), vec![first, second]);
    }

    #[test]
    fn should_drop_malformed_ids_silently() {
        let valid = Uuid::new_v4();
        let raw = format!("42,{},potato", valid);

        assert_eq!(parse_ids(&raw), vec![valid]);
    }

    #[test]
    fn should_keep_duplicate_ids_when_decoding() {
        let id = Uuid::new_v4();
        let raw = format!("{},{}", id, id);

        assert_eq!(parse_ids(&raw), vec![id, id]);
    }

    #[test]
    fn should_decode_blank_input_to_nothing() {
        assert!(parse_ids("").is_empty());
        assert!(parse_ids("  ").is_empty());
        assert!(parse_ids(",,,").is_empty());
    }

    #[test]
    fn should_order_columns_by_first_occurrence_in_request() {
        let first = full_product();
        let second = bare_product();
        let ids = vec![second.id, first.id];

        let ordered = order_by_request(&ids, vec![first.clone(), second.clone()]);

        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mystery Tub", "Cascade 6"]);
    }

    #[test]
    fn should_collapse_duplicate_requests_to_one_column() {
        let product = full_product();
        let ids = vec![product.id, product.id];

        let ordered = order_by_request(&ids, vec![product]);

        assert_eq!(ordered.len(), 1);
    }

    #[test]
    fn should_skip_ids_that_resolved_to_nothing() {
        let product = full_product();
        let ids = vec![Uuid::new_v4(), product.id];

        let ordered = order_by_request(&ids, vec![product.clone()]);

        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].id, product.id);
    }

    #[test]
    fn should_build_seven_feature_rows_in_fixed_order() {
        let sheet = build_sheet(&[full_product(), bare_product()], &images());

        let labels: Vec<&str> = sheet.features.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Price",
                "Rating",
                "Seating Capacity",
                "Jet Count",
                "Color Options",
                "Dimensions",
                "Warranty (years)",
            ]
        );
        assert_eq!(sheet.cards.len(), 2);
        assert!(sheet.features.iter().all(|row| row.values.len() == 2));
    }

    #[test]
    fn should_fill_declared_attributes_and_dashes_side_by_side() {
        let sheet = build_sheet(&[full_product(), bare_product()], &images());

        let rating_row = &sheet.features[1];
        assert_eq!(rating_row.values, vec!["4.5", MISSING_VALUE]);

        let seats_row = &sheet.features[2];
        assert_eq!(seats_row.values, vec!["6", MISSING_VALUE]);

        let warranty_row = &sheet.features[6];
        assert_eq!(warranty_row.values, vec!["5", MISSING_VALUE]);
    }

    #[test]
    fn should_format_prices_in_feature_row() {
        let sheet = build_sheet(&[full_product(), bare_product()], &images());

        assert_eq!(sheet.features[0].values, vec!["12,345", "7,999.50"]);
    }

    #[test]
    fn should_resolve_card_image_and_links() {
        let product = full_product();
        let sheet = build_sheet(&[product.clone()], &images());

        let card = &sheet.cards[0];
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://cdn.example.com/public/hot-tubs/cascade-6/front.jpg")
        );
        assert_eq!(card.detail_path, format!("/models/{}", product.id));
        assert_eq!(card.booking_path, "/book-visit?model=Cascade+6");
    }

    #[test]
    fn should_leave_card_image_unset_without_storage_path() {
        let sheet = build_sheet(&[bare_product()], &images());

        assert_eq!(sheet.cards[0].image_url, None);
    }

    #[test]
    fn should_group_thousands_in_whole_prices() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(12345.0), "12,345");
        assert_eq!(format_price(1_000_000.0), "1,000,000");
    }

    #[test]
    fn should_keep_two_decimals_for_fractional_prices() {
        assert_eq!(format_price(7999.5), "7,999.50");
        assert_eq!(format_price(1234.99), "1,234.99");
    }

    #[test]
    fn should_format_rating_with_one_decimal() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(4.5), "4.5");
    }
}
