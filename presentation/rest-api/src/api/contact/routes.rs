use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::contact::use_cases::send::{
    SendContactMessageParams, SendContactMessageUseCase,
};

use crate::api::contact::dto::{ContactMessageResponse, SendContactMessageRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ContactApi {
    send_use_case: Arc<dyn SendContactMessageUseCase>,
}

impl ContactApi {
    pub fn new(send_use_case: Arc<dyn SendContactMessageUseCase>) -> Self {
        Self { send_use_case }
    }
}

/// Contact API
///
/// Endpoint that forwards storefront messages to the showroom by SMS.
#[OpenApi]
impl ContactApi {
    /// Send a message to the showroom
    ///
    /// Forwards the message as one SMS to the showroom staff.
    #[oai(path = "/contact/messages", method = "post", tag = "ApiTags::Contact")]
    async fn send(&self, body: Json<SendContactMessageRequest>) -> SendContactMessageResponse {
        let params = SendContactMessageParams {
            message: body.0.message,
            reply_to: body.0.reply_to,
        };

        match self.send_use_case.execute(params).await {
            Ok(message) => SendContactMessageResponse::Created(Json(message.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendContactMessageResponse::BadRequest(json),
                    502 => SendContactMessageResponse::BadGateway(json),
                    _ => SendContactMessageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendContactMessageResponse {
    #[oai(status = 201)]
    Created(Json<ContactMessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
