use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::model::ContactMessage;
use crate::domain::contact::repository::ContactMessageRepository;
use crate::domain::contact::services::SmsNotifierService;
use crate::domain::contact::use_cases::send::{
    SendContactMessageParams, SendContactMessageUseCase,
};
use crate::domain::logger::Logger;

pub struct SendContactMessageUseCaseImpl {
    pub repository: Arc<dyn ContactMessageRepository>,
    pub notifier: Arc<dyn SmsNotifierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendContactMessageUseCase for SendContactMessageUseCaseImpl {
    async fn execute(
        &self,
        params: SendContactMessageParams,
    ) -> Result<ContactMessage, ContactError> {
        let message = ContactMessage::new(params.message, params.reply_to)?;

        // The back office copy is best effort; losing it must not block
        // the SMS to the showroom.
        if let Err(error) = self.repository.save(&message).await {
            self.logger
                .warn(&format!("Could not persist contact message: {}", error));
        }

        self.notifier.notify(&message).await?;

        self.logger
            .info(&format!("Forwarded contact message {}", message.id));

        Ok(message)
    }
}
