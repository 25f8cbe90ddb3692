use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::guide::errors::GuideError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GuideError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            GuideError::TranscriptEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "guide.transcript_empty",
            ),
            GuideError::CompletionFailed => (
                StatusCode::BAD_GATEWAY,
                "CompletionError",
                "guide.completion_failed",
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
