use std::sync::Arc;

use async_trait::async_trait;

use super::details::RecipeDetailsAssembler;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

pub struct GetRecipeByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub details: Arc<RecipeDetailsAssembler>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<RecipeDetails, RecipeError> {
        self.logger.debug(&format!("Fetching recipe {}", params.id));

        let recipe = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        Ok(self
            .details
            .assemble_one(recipe, params.viewer.as_ref())
            .await?)
    }
}
