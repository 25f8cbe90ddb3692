use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::model::Appointment;

pub struct BookAppointmentParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub model_interest: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait BookAppointmentUseCase: Send + Sync {
    async fn execute(&self, params: BookAppointmentParams) -> Result<Appointment, AppointmentError>;
}
