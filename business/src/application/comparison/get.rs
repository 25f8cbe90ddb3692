use std::sync::Arc;

use async_trait::async_trait;

use crate::application::comparison::sessions::SelectionSessions;
use crate::domain::comparison::use_cases::get::{
    GetSelectionParams, GetSelectionUseCase, SelectionView,
};
use crate::domain::logger::Logger;

pub struct GetSelectionUseCaseImpl {
    pub sessions: Arc<SelectionSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSelectionUseCase for GetSelectionUseCaseImpl {
    async fn execute(&self, params: GetSelectionParams) -> SelectionView {
        let store = self.sessions.store_for(&params.session).await;
        let store = store.lock().await;

        self.logger.debug(&format!(
            "Session {} has {} products selected",
            params.session,
            store.selection().len()
        ));

        SelectionView::of(store.selection())
    }
}
