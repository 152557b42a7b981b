/// Storage-agnostic errors raised by repository ports.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
