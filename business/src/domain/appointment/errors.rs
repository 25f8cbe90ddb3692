#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("appointment.name_empty")]
    NameEmpty,
    #[error("appointment.email_invalid")]
    EmailInvalid,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
