use async_trait::async_trait;
use serde_json::json;

use business::domain::guide::errors::GuideError;
use business::domain::guide::greeting::GuideRoute;
use business::domain::guide::model::ChatMessage;
use business::domain::guide::services::GuideResponderService;
use business::domain::product::model::Product;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are the AI Hot Tub Guide for Santa Rosa Hot Tubs, a friendly in-store expert for spa shoppers.

Core principles:
- Answer questions about the hot tubs in the catalog below and recommend from that catalog only
- Be brief and warm: two or three sentences, no bullet lists unless asked
- Compare seats, jets, price and warranty when the visitor hesitates between models
- Suggest booking a showroom visit when the visitor sounds ready to decide
- Never invent models, prices or specs that are not in the catalog"#;

pub struct GuideResponderOpenAI {
    client: OpenAIClient,
}

impl GuideResponderOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn catalog_context(catalog: &[Product]) -> String {
        if catalog.is_empty() {
            return "The catalog is currently unavailable.".to_string();
        }
        catalog
            .iter()
            .map(|p| {
                let brand = p.brand.as_deref().unwrap_or("Unknown");
                let seats = p
                    .seating_capacity
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let jets = p
                    .jet_count
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "?".to_string());
                format!(
                    "- {} ({}) — {} seats, {} jets. {}",
                    p.name, brand, seats, jets, p.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn route_context(route: GuideRoute) -> &'static str {
        match route {
            GuideRoute::Detail => "The visitor is reading a single model's detail page.",
            GuideRoute::Listing => "The visitor is browsing the catalog listing.",
            GuideRoute::Compare => "The visitor is comparing selected models side by side.",
            GuideRoute::Other => "The visitor is elsewhere in the storefront.",
        }
    }
}

#[async_trait]
impl GuideResponderService for GuideResponderOpenAI {
    async fn reply(
        &self,
        transcript: &[ChatMessage],
        route: GuideRoute,
        catalog: &[Product],
    ) -> Result<ChatMessage, GuideError> {
        let system = format!(
            "{}\n\n{}\n\nCatalog:\n{}",
            SYSTEM_PROMPT,
            Self::route_context(route),
            Self::catalog_context(catalog)
        );

        let mut messages = vec![json!({"role": "system", "content": system})];
        for message in transcript {
            messages.push(json!({
                "role": message.role.to_string(),
                "content": message.content,
            }));
        }

        let body = json!({
            "model": self.client.model,
            "messages": messages,
            "temperature": 0.7,
            "max_tokens": 400,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| GuideError::CompletionFailed)?;

        if !response.status().is_success() {
            return Err(GuideError::CompletionFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| GuideError::CompletionFailed)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(GuideError::CompletionFailed)?;

        Ok(ChatMessage::assistant(content.trim()))
    }
}
