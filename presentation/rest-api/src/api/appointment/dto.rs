use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::appointment::model::Appointment;
use business::domain::appointment::value_objects::AppointmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AppointmentStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "confirmed")]
    Confirmed,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<AppointmentStatus> for AppointmentStatusDto {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => AppointmentStatusDto::Pending,
            AppointmentStatus::Confirmed => AppointmentStatusDto::Confirmed,
            AppointmentStatus::Cancelled => AppointmentStatusDto::Cancelled,
        }
    }
}

/// Request to book a showroom visit.
#[derive(Debug, Clone, Object)]
pub struct BookAppointmentRequest {
    /// Visitor name (cannot be empty)
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    /// Requested visit date
    pub visit_date: NaiveDate,
    /// Requested visit time
    pub visit_time: NaiveTime,
    /// Model the visitor wants to see, prefilled by booking links
    #[oai(skip_serializing_if_is_none)]
    pub model_interest: Option<String>,
    /// Anything else the showroom should know
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AppointmentResponse {
    /// Appointment unique identifier
    pub id: String,
    /// Visitor name
    pub name: String,
    /// Contact email, lowercased
    pub email: String,
    /// Contact phone
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    /// Requested visit date
    pub visit_date: NaiveDate,
    /// Requested visit time
    pub visit_time: NaiveTime,
    /// Model the visitor wants to see
    #[oai(skip_serializing_if_is_none)]
    pub model_interest: Option<String>,
    /// Extra notes
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    /// Appointment status
    pub status: AppointmentStatusDto,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            name: appointment.name,
            email: appointment.email,
            phone: appointment.phone,
            visit_date: appointment.visit_date,
            visit_time: appointment.visit_time,
            model_interest: appointment.model_interest,
            notes: appointment.notes,
            status: appointment.status.into(),
            created_at: appointment.created_at,
        }
    }
}
