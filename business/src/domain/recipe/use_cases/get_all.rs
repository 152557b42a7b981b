use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::filter::RecipeQuery;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

pub struct GetRecipesParams {
    pub query: RecipeQuery,
    pub viewer: Option<UserId>,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipesParams) -> Result<Page<RecipeDetails>, RecipeError>;
}
