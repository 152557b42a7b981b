use std::sync::Arc;

use async_trait::async_trait;

use super::content::{resolve_ingredients, resolve_tags};
use super::details::RecipeDetailsAssembler;
use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::image::RecipeImage;
use crate::domain::recipe::model::{
    NewRecipeProps, RecipeDetails, validate_ingredient_amounts, validate_tag_ids,
};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::services::ImageStorage;
use crate::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use crate::domain::tag::repository::TagRepository;

/// Partial update: omitted fields keep their stored value. Only the author
/// may edit a recipe.
pub struct UpdateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub ingredients: Arc<dyn IngredientRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub storage: Arc<dyn ImageStorage>,
    pub details: Arc<RecipeDetailsAssembler>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateRecipeUseCase for UpdateRecipeUseCaseImpl {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<RecipeDetails, RecipeError> {
        self.logger.info(&format!(
            "Updating recipe {} by {}",
            params.id, params.editor
        ));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        if !existing.is_authored_by(&params.editor) {
            self.logger.warn(&format!(
                "User {} tried to edit recipe {} owned by {}",
                params.editor, existing.id, existing.author_id
            ));
            return Err(RecipeError::Forbidden);
        }

        let ingredients = match params.ingredients {
            Some(items) => {
                validate_ingredient_amounts(&items)?;
                resolve_ingredients(self.ingredients.as_ref(), &items).await?
            }
            None => existing.ingredients.clone(),
        };
        let tags = match params.tags {
            Some(ids) => {
                validate_tag_ids(&ids)?;
                resolve_tags(self.tags.as_ref(), &ids).await?
            }
            None => existing.tags.clone(),
        };
        let image = params
            .image
            .as_deref()
            .map(RecipeImage::from_data_url)
            .transpose()?;

        let props = NewRecipeProps {
            author_id: existing.author_id.clone(),
            name: params.name.unwrap_or_else(|| existing.name.clone()),
            image: image
                .as_ref()
                .map(|i| i.path.clone())
                .unwrap_or_else(|| existing.image.clone()),
            text: params.text.unwrap_or_else(|| existing.text.clone()),
            cooking_time: params.cooking_time.unwrap_or(existing.cooking_time),
            ingredients,
            tags,
        };
        let recipe = existing.revise(props)?;

        if let Some(image) = &image {
            self.storage.store(image).await?;
        }
        self.repository.save(&recipe).await?;

        self.logger.info(&format!("Recipe updated: {}", recipe.id));
        Ok(self
            .details
            .assemble_one(recipe, Some(&params.editor))
            .await?)
    }
}
