#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("tag.name_empty")]
    NameEmpty,
    #[error("tag.invalid_color")]
    InvalidColor,
    #[error("tag.invalid_slug")]
    InvalidSlug,
    #[error("tag.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
