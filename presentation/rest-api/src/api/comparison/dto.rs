use poem_openapi::Object;

use business::domain::comparison::sheet::{ComparisonCard, ComparisonSheet, FeatureRow};
use business::domain::comparison::use_cases::build_sheet::ComparisonView;
use business::domain::comparison::use_cases::get::SelectionView;

/// Shown when the compare page is opened without any usable ids.
pub const NOTHING_SELECTED_MESSAGE: &str = "No products selected.";
/// Shown when none of the requested ids resolve to catalog rows.
pub const NO_MATCHES_MESSAGE: &str = "No matching products found.";

#[derive(Debug, Clone, Object)]
pub struct SelectionResponse {
    /// Selected product ids in the order they were picked
    pub product_ids: Vec<String>,
    /// Number of selected products
    pub count: usize,
    /// Whether the compare call-to-action should be shown (two or more picks)
    pub compare_available: bool,
    /// Comparison page path, present once comparing is available
    #[oai(skip_serializing_if_is_none)]
    pub compare_path: Option<String>,
}

impl From<SelectionView> for SelectionResponse {
    fn from(view: SelectionView) -> Self {
        Self {
            product_ids: view.product_ids.iter().map(|id| id.to_string()).collect(),
            count: view.count,
            compare_available: view.compare_available,
            compare_path: view.compare_path,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ComparisonCardResponse {
    /// Product unique identifier
    pub id: String,
    /// Model name
    pub name: String,
    /// Marketing description
    pub description: String,
    /// Manufacturer brand
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Formatted price label, e.g. "12,345"
    pub price_label: String,
    /// Formatted rating label with one decimal, e.g. "4.5"
    #[oai(skip_serializing_if_is_none)]
    pub rating_label: Option<String>,
    /// Resolved primary image URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Storefront detail page path
    pub detail_path: String,
    /// Showroom booking path prefilled with this model
    pub booking_path: String,
}

impl From<ComparisonCard> for ComparisonCardResponse {
    fn from(card: ComparisonCard) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name,
            description: card.description,
            brand: card.brand,
            price_label: card.price_label,
            rating_label: card.rating_label,
            image_url: card.image_url,
            detail_path: card.detail_path,
            booking_path: card.booking_path,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FeatureRowResponse {
    /// Feature label
    pub label: String,
    /// One value per card, aligned by index; an em dash when unknown
    pub values: Vec<String>,
}

impl From<FeatureRow> for FeatureRowResponse {
    fn from(row: FeatureRow) -> Self {
        Self {
            label: row.label,
            values: row.values,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ComparisonResponse {
    /// One card per compared product, in requested order
    pub cards: Vec<ComparisonCardResponse>,
    /// The fixed feature rows, aligned with the cards
    pub features: Vec<FeatureRowResponse>,
    /// Set when there is nothing to compare, with the text to display
    #[oai(skip_serializing_if_is_none)]
    pub empty_message: Option<String>,
}

impl ComparisonResponse {
    fn empty(message: &str) -> Self {
        Self {
            cards: Vec::new(),
            features: Vec::new(),
            empty_message: Some(message.to_string()),
        }
    }

    fn from_sheet(sheet: ComparisonSheet) -> Self {
        Self {
            cards: sheet.cards.into_iter().map(|c| c.into()).collect(),
            features: sheet.features.into_iter().map(|r| r.into()).collect(),
            empty_message: None,
        }
    }
}

impl From<ComparisonView> for ComparisonResponse {
    fn from(view: ComparisonView) -> Self {
        match view {
            ComparisonView::NothingSelected => Self::empty(NOTHING_SELECTED_MESSAGE),
            ComparisonView::NoMatches => Self::empty(NO_MATCHES_MESSAGE),
            ComparisonView::Sheet(sheet) => Self::from_sheet(sheet),
        }
    }
}
