use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::comparison::use_cases::get::SelectionView;
use crate::domain::shared::value_objects::SessionKey;

pub struct ToggleSelectionParams {
    pub session: SessionKey,
    pub product_id: Uuid,
}

#[async_trait]
pub trait ToggleSelectionUseCase: Send + Sync {
    async fn execute(&self, params: ToggleSelectionParams) -> SelectionView;
}
