use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;

pub struct ImportIngredientItem {
    pub name: String,
    pub measurement_unit: String,
}

pub struct ImportIngredientsParams {
    pub items: Vec<ImportIngredientItem>,
}

#[async_trait]
pub trait ImportIngredientsUseCase: Send + Sync {
    /// Returns the number of ingredients actually inserted.
    async fn execute(&self, params: ImportIngredientsParams) -> Result<u64, IngredientError>;
}
