/// Failure codes shared by every repository port.
/// Variants render as code-style identifiers so surface layers can translate
/// them without parsing prose.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}
