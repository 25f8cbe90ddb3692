use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ContactError;

/// A message left through the storefront contact widget. It is kept for the
/// back office and forwarded to the showroom phone by SMS.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: Uuid,
    pub message: String,
    pub reply_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(message: String, reply_to: Option<String>) -> Result<Self, ContactError> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(ContactError::MessageEmpty);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            message,
            reply_to: reply_to
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            created_at: Utc::now(),
        })
    }
}
