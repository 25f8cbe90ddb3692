use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::guide::errors::GuideError;
use crate::domain::guide::model::{ChatLogEntry, ChatMessage, ChatRole};
use crate::domain::guide::repository::ChatLogRepository;
use crate::domain::guide::services::GuideResponderService;
use crate::domain::guide::use_cases::reply::{GuideReplyParams, GuideReplyUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

/// The one line the guide answers with when the completion cannot be
/// reached, times out or comes back unusable.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting right now. Please try again shortly.";

pub struct GuideReplyUseCaseImpl {
    pub responder: Arc<dyn GuideResponderService>,
    pub products: Arc<dyn ProductRepository>,
    pub chat_log: Arc<dyn ChatLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GuideReplyUseCase for GuideReplyUseCaseImpl {
    async fn execute(&self, params: GuideReplyParams) -> Result<ChatMessage, GuideError> {
        if params.transcript.is_empty() {
            return Err(GuideError::TranscriptEmpty);
        }

        self.logger.info(&format!(
            "Guide answering a {} message transcript from the {} route",
            params.transcript.len(),
            params.route
        ));

        // The catalog grounds the reply. A broken read only costs context,
        // never the answer.
        let catalog = match self.products.find_all().await {
            Ok(products) => products,
            Err(error) => {
                self.logger
                    .warn(&format!("Guide context unavailable: {}", error));
                Vec::new()
            }
        };

        let reply = match self
            .responder
            .reply(&params.transcript, params.route, &catalog)
            .await
        {
            Ok(message) => message,
            Err(error) => {
                self.logger
                    .error(&format!("Guide completion failed: {}", error));
                return Ok(ChatMessage::assistant(FALLBACK_MESSAGE));
            }
        };

        if let Some(last_user) = params
            .transcript
            .iter()
            .rev()
            .find(|message| message.role == ChatRole::User)
        {
            let entry = ChatLogEntry::new(
                params.route,
                last_user.content.clone(),
                reply.content.clone(),
            );
            if let Err(error) = self.chat_log.save(&entry).await {
                self.logger
                    .warn(&format!("Could not log guide exchange: {}", error));
            }
        }

        Ok(reply)
    }
}
