use async_trait::async_trait;

use crate::domain::comparison::use_cases::get::SelectionView;
use crate::domain::shared::value_objects::SessionKey;

pub struct ClearSelectionParams {
    pub session: SessionKey,
}

#[async_trait]
pub trait ClearSelectionUseCase: Send + Sync {
    async fn execute(&self, params: ClearSelectionParams) -> SelectionView;
}
