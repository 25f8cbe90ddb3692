use std::sync::Arc;

use async_trait::async_trait;

use crate::application::comparison::sessions::SelectionSessions;
use crate::domain::comparison::use_cases::get::SelectionView;
use crate::domain::comparison::use_cases::toggle::{ToggleSelectionParams, ToggleSelectionUseCase};
use crate::domain::logger::Logger;

pub struct ToggleSelectionUseCaseImpl {
    pub sessions: Arc<SelectionSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleSelectionUseCase for ToggleSelectionUseCaseImpl {
    async fn execute(&self, params: ToggleSelectionParams) -> SelectionView {
        let store = self.sessions.store_for(&params.session).await;
        let mut store = store.lock().await;

        let selected = store.toggle(params.product_id).await;
        self.logger.info(&format!(
            "Session {} {} product {}",
            params.session,
            if selected { "selected" } else { "deselected" },
            params.product_id
        ));

        SelectionView::of(store.selection())
    }
}
