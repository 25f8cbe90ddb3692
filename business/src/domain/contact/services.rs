use async_trait::async_trait;

use super::errors::ContactError;
use super::model::ContactMessage;

/// Service port for forwarding a contact message to the showroom phone.
/// One bounded SMS request per message, no retries.
#[async_trait]
pub trait SmsNotifierService: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactError>;
}
