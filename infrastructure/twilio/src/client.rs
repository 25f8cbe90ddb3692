use reqwest::Client;

/// Shared Twilio HTTP client configuration.
pub struct TwilioClient {
    pub client: Client,
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub notify_number: String,
}

impl TwilioClient {
    pub fn new(
        account_sid: String,
        auth_token: String,
        from_number: String,
        notify_number: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            account_sid,
            auth_token,
            from_number,
            notify_number,
        }
    }

    /// Returns the message creation endpoint URL for the configured account.
    pub fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        )
    }
}
