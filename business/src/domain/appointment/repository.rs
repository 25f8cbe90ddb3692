use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Appointment;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError>;
}
