use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{IngredientAmount, RecipeDetails};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateRecipeParams {
    pub id: Uuid,
    pub editor: UserId,
    pub name: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
    pub ingredients: Option<Vec<IngredientAmount>>,
    pub tags: Option<Vec<Uuid>>,
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<RecipeDetails, RecipeError>;
}
