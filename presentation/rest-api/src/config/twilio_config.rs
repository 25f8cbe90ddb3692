/// Configuration for Twilio SMS delivery.
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub notify_number: String,
}

impl TwilioConfig {
    pub fn from_env() -> Self {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .expect("TWILIO_ACCOUNT_SID environment variable must be set");
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .expect("TWILIO_AUTH_TOKEN environment variable must be set");
        let from_number = std::env::var("TWILIO_FROM_NUMBER")
            .expect("TWILIO_FROM_NUMBER environment variable must be set");
        let notify_number = std::env::var("TWILIO_NOTIFY_NUMBER")
            .expect("TWILIO_NOTIFY_NUMBER environment variable must be set");

        Self {
            account_sid,
            auth_token,
            from_number,
            notify_number,
        }
    }
}
