use async_trait::async_trait;

use business::domain::contact::errors::ContactError;
use business::domain::contact::model::ContactMessage;
use business::domain::contact::services::SmsNotifierService;

use crate::client::TwilioClient;

pub struct TwilioSmsNotifier {
    client: TwilioClient,
}

impl TwilioSmsNotifier {
    pub fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    fn sms_body(message: &ContactMessage) -> String {
        match &message.reply_to {
            Some(contact) => format!("New storefront message: {} (reply to {})", message.message, contact),
            None => format!("New storefront message: {}", message.message),
        }
    }
}

#[async_trait]
impl SmsNotifierService for TwilioSmsNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let params = [
            ("Body", Self::sms_body(message)),
            ("From", self.client.from_number.clone()),
            ("To", self.client.notify_number.clone()),
        ];

        let response = self
            .client
            .client
            .post(self.client.messages_url())
            .basic_auth(&self.client.account_sid, Some(&self.client.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|_| ContactError::DeliveryFailed)?;

        if !response.status().is_success() {
            return Err(ContactError::DeliveryFailed);
        }

        Ok(())
    }
}
