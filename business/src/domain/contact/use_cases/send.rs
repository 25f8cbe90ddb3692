use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::model::ContactMessage;

pub struct SendContactMessageParams {
    pub message: String,
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendContactMessageParams)
    -> Result<ContactMessage, ContactError>;
}
