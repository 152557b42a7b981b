#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.name_empty")]
    NameEmpty,
    #[error("ingredient.measurement_unit_empty")]
    MeasurementUnitEmpty,
    #[error("ingredient.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
