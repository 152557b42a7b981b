use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{IngredientAmount, RecipeDetails};
use crate::domain::shared::value_objects::UserId;

pub struct CreateRecipeParams {
    pub author_id: UserId,
    pub name: String,
    /// `data:image/...;base64,...` URL.
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub ingredients: Vec<IngredientAmount>,
    pub tags: Vec<Uuid>,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<RecipeDetails, RecipeError>;
}
