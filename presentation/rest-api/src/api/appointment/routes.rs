use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::appointment::use_cases::book::{
    BookAppointmentParams, BookAppointmentUseCase,
};

use crate::api::appointment::dto::{AppointmentResponse, BookAppointmentRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AppointmentApi {
    book_use_case: Arc<dyn BookAppointmentUseCase>,
}

impl AppointmentApi {
    pub fn new(book_use_case: Arc<dyn BookAppointmentUseCase>) -> Self {
        Self { book_use_case }
    }
}

/// Appointment API
///
/// Endpoint for booking showroom visits from the storefront.
#[OpenApi]
impl AppointmentApi {
    /// Book a showroom visit
    ///
    /// Registers a pending appointment for the requested date and time.
    #[oai(path = "/appointments", method = "post", tag = "ApiTags::Appointments")]
    async fn book(&self, body: Json<BookAppointmentRequest>) -> BookAppointmentResponse {
        let params = BookAppointmentParams {
            name: body.0.name,
            email: body.0.email,
            phone: body.0.phone,
            visit_date: body.0.visit_date,
            visit_time: body.0.visit_time,
            model_interest: body.0.model_interest,
            notes: body.0.notes,
        };

        match self.book_use_case.execute(params).await {
            Ok(appointment) => BookAppointmentResponse::Created(Json(appointment.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BookAppointmentResponse::BadRequest(json),
                    _ => BookAppointmentResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BookAppointmentResponse {
    #[oai(status = 201)]
    Created(Json<AppointmentResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
