#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.invalid_username")]
    InvalidUsername,
    #[error("user.first_name_empty")]
    FirstNameEmpty,
    #[error("user.last_name_empty")]
    LastNameEmpty,
    #[error("user.not_found")]
    NotFound,
    #[error("user.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
