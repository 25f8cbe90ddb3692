use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::appointment::errors::AppointmentError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AppointmentError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AppointmentError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "appointment.name_empty",
            ),
            AppointmentError::EmailInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "appointment.email_invalid",
            ),
            AppointmentError::Repository(_) => (
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
