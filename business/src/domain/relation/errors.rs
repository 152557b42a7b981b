#[derive(Debug, thiserror::Error)]
pub enum RelationError {
    #[error("relation.already_exists")]
    AlreadyExists,
    #[error("relation.not_found")]
    NotFound,
    #[error("relation.target_not_found")]
    TargetNotFound,
    #[error("relation.self_reference")]
    SelfReference,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
