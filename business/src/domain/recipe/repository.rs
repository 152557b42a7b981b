use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

use super::filter::RecipeFilter;
use super::model::{Recipe, RecipeIngredient};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Matching recipes, newest first.
    async fn get_page(
        &self,
        filter: &RecipeFilter,
        page: &PageRequest,
    ) -> Result<Page<Recipe>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
    /// Newest recipes of an author, at most `limit`.
    async fn get_by_author(
        &self,
        author_id: &UserId,
        limit: u32,
    ) -> Result<Vec<Recipe>, RepositoryError>;
    async fn count_by_author(&self, author_id: &UserId) -> Result<u64, RepositoryError>;
    /// Every ingredient line of the given recipes. Unknown ids contribute nothing.
    async fn get_ingredient_lines(
        &self,
        recipe_ids: &[Uuid],
    ) -> Result<Vec<RecipeIngredient>, RepositoryError>;
    /// Writes the recipe together with its ingredient lines and tags.
    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
