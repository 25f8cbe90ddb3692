use async_trait::async_trait;

use crate::domain::guide::errors::GuideError;
use crate::domain::guide::greeting::GuideRoute;
use crate::domain::guide::model::ChatMessage;

pub struct GuideReplyParams {
    pub transcript: Vec<ChatMessage>,
    pub route: GuideRoute,
}

/// Answers the visitor's latest message.
///
/// The only error a caller can see is an empty transcript. Completion
/// trouble of any kind answers with the one fixed fallback line instead.
#[async_trait]
pub trait GuideReplyUseCase: Send + Sync {
    async fn execute(&self, params: GuideReplyParams) -> Result<ChatMessage, GuideError>;
}
