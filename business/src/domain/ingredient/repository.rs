use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Ingredient;

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// All ingredients ordered by name.
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
    /// Ingredients whose name contains `query`, case-insensitively.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError>;
    /// Inserts unless the (name, unit) pair exists. Returns whether a row was written.
    async fn insert_if_absent(&self, ingredient: &Ingredient) -> Result<bool, RepositoryError>;
}
