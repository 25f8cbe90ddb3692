use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::GuideError;
use super::greeting::GuideRoute;
use super::model::ChatMessage;

/// Service port for the AI guide completion.
///
/// One bounded request per call: no retries, no streaming. The catalog
/// snapshot grounds the reply in what the store actually sells.
#[async_trait]
pub trait GuideResponderService: Send + Sync {
    async fn reply(
        &self,
        transcript: &[ChatMessage],
        route: GuideRoute,
        catalog: &[Product],
    ) -> Result<ChatMessage, GuideError>;
}
