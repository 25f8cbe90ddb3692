use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::contact::model::ContactMessage;

/// Request to send a message to the showroom.
#[derive(Debug, Clone, Object)]
pub struct SendContactMessageRequest {
    /// Message text (cannot be empty)
    pub message: String,
    /// How the showroom can reach back, e.g. a phone number or email
    #[oai(skip_serializing_if_is_none)]
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ContactMessageResponse {
    /// Message unique identifier
    pub id: String,
    /// Message text as delivered
    pub message: String,
    /// Reply-to contact, when provided
    #[oai(skip_serializing_if_is_none)]
    pub reply_to: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.to_string(),
            message: message.message,
            reply_to: message.reply_to,
            created_at: message.created_at,
        }
    }
}
