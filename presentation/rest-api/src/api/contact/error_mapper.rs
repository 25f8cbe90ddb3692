use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::contact::errors::ContactError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ContactError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ContactError::MessageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "contact.message_empty",
            ),
            ContactError::DeliveryFailed => (
                StatusCode::BAD_GATEWAY,
                "DeliveryError",
                "contact.delivery_failed",
            ),
            ContactError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
