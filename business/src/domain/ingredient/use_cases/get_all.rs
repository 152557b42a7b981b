use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct GetIngredientsParams {
    /// Optional name filter.
    pub name: Option<String>,
}

#[async_trait]
pub trait GetIngredientsUseCase: Send + Sync {
    async fn execute(&self, params: GetIngredientsParams)
    -> Result<Vec<Ingredient>, IngredientError>;
}
