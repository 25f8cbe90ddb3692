#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact.message_empty")]
    MessageEmpty,
    #[error("contact.delivery_failed")]
    DeliveryFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
