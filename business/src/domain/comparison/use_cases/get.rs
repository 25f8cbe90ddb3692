use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::comparison::selection::SelectionSet;
use crate::domain::product::links;
use crate::domain::shared::value_objects::SessionKey;

pub struct GetSelectionParams {
    pub session: SessionKey,
}

/// What the storefront needs to render the comparison tray: the picks in
/// order, and the call-to-action once two or more are selected.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub product_ids: Vec<Uuid>,
    pub count: usize,
    pub compare_available: bool,
    pub compare_path: Option<String>,
}

impl SelectionView {
    pub fn of(selection: &SelectionSet) -> Self {
        let compare_available = selection.compare_available();
        Self {
            product_ids: selection.ids().to_vec(),
            count: selection.len(),
            compare_available,
            compare_path: compare_available.then(|| links::comparison_path(selection.ids())),
        }
    }
}

/// Selection reads never fail: storage trouble degrades to the in-memory
/// state, a fresh session starts empty.
#[async_trait]
pub trait GetSelectionUseCase: Send + Sync {
    async fn execute(&self, params: GetSelectionParams) -> SelectionView;
}
