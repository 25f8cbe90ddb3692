use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::guide::greeting::GuideRoute;
use business::domain::guide::use_cases::greet::{GreetGuideParams, GreetGuideUseCase};
use business::domain::guide::use_cases::reply::{GuideReplyParams, GuideReplyUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::guide::dto::{ChatMessageDto, GuideChatRequest};
use crate::api::tags::ApiTags;

pub struct GuideApi {
    reply_use_case: Arc<dyn GuideReplyUseCase>,
    greet_use_case: Arc<dyn GreetGuideUseCase>,
}

impl GuideApi {
    pub fn new(
        reply_use_case: Arc<dyn GuideReplyUseCase>,
        greet_use_case: Arc<dyn GreetGuideUseCase>,
    ) -> Self {
        Self {
            reply_use_case,
            greet_use_case,
        }
    }
}

/// Guide API
///
/// Endpoints for the AI hot tub guide: a per-page greeting to seed the
/// widget, and the chat reply itself.
#[OpenApi]
impl GuideApi {
    /// Ask the guide
    ///
    /// Sends the conversation to the guide and returns one assistant
    /// message. When the guide cannot answer, the message is a fixed
    /// connection-trouble apology rather than an error.
    #[oai(path = "/guide/chat", method = "post", tag = "ApiTags::Guide")]
    async fn chat(&self, body: Json<GuideChatRequest>) -> GuideChatResponse {
        let route = GuideRoute::from_path(body.0.path.as_deref().unwrap_or(""));
        let transcript = body.0.messages.into_iter().map(|m| m.into()).collect();

        match self
            .reply_use_case
            .execute(GuideReplyParams { transcript, route })
            .await
        {
            Ok(message) => GuideChatResponse::Ok(Json(message.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GuideChatResponse::BadRequest(json),
                    _ => GuideChatResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get the greeting for a page
    ///
    /// Returns the fixed assistant greeting for the given route token
    /// (detail, listing, compare). Unknown or missing tokens fall back to
    /// the default greeting.
    #[oai(path = "/guide/greeting", method = "get", tag = "ApiTags::Guide")]
    async fn greeting(
        &self,
        /// Route token: detail, listing, compare or other
        route: Query<Option<String>>,
    ) -> GreetingResponse {
        let route = route
            .0
            .and_then(|r| r.parse::<GuideRoute>().ok())
            .unwrap_or(GuideRoute::Other);

        let message = self
            .greet_use_case
            .execute(GreetGuideParams { route })
            .await;

        GreetingResponse::Ok(Json(message.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GuideChatResponse {
    #[oai(status = 200)]
    Ok(Json<ChatMessageDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GreetingResponse {
    #[oai(status = 200)]
    Ok(Json<ChatMessageDto>),
}
