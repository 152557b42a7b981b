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
    NewRecipeProps, Recipe, RecipeDetails, validate_ingredient_amounts, validate_tag_ids,
};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::services::ImageStorage;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use crate::domain::tag::repository::TagRepository;

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub ingredients: Arc<dyn IngredientRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub storage: Arc<dyn ImageStorage>,
    pub details: Arc<RecipeDetailsAssembler>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<RecipeDetails, RecipeError> {
        self.logger.info(&format!(
            "Creating recipe '{}' for author {}",
            params.name, params.author_id
        ));

        validate_ingredient_amounts(&params.ingredients)?;
        validate_tag_ids(&params.tags)?;
        let image = RecipeImage::from_data_url(&params.image)?;

        match self.details.users.get_by_id(&params.author_id).await {
            Ok(_) => {}
            Err(RepositoryError::NotFound) => return Err(RecipeError::AuthorProfileMissing),
            Err(e) => return Err(e.into()),
        }

        let ingredients = resolve_ingredients(self.ingredients.as_ref(), &params.ingredients).await?;
        let tags = resolve_tags(self.tags.as_ref(), &params.tags).await?;

        let recipe = Recipe::new(NewRecipeProps {
            author_id: params.author_id.clone(),
            name: params.name,
            image: image.path.clone(),
            text: params.text,
            cooking_time: params.cooking_time,
            ingredients,
            tags,
        })?;

        self.storage.store(&image).await?;
        self.repository.save(&recipe).await?;

        self.logger.info(&format!("Recipe created: {}", recipe.id));
        Ok(self
            .details
            .assemble_one(recipe, Some(&params.author_id))
            .await?)
    }
}
