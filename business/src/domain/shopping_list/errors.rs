#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
