use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path};
use uuid::Uuid;

use business::domain::recipe::use_cases::get_by_id::GetRecipeByIdUseCase;
use business::domain::relation::use_cases::add::{AddRelationUseCase, RelationParams};
use business::domain::relation::use_cases::remove::RemoveRelationUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::Links;
use crate::api::relation::handler::add_recipe_relation;
use crate::api::relation::responses::{AddRecipeRelationResponse, RemoveRelationResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    add_use_case: Arc<dyn AddRelationUseCase<Uuid>>,
    remove_use_case: Arc<dyn RemoveRelationUseCase<Uuid>>,
    get_recipe_use_case: Arc<dyn GetRecipeByIdUseCase>,
    links: Links,
}

impl FavoriteApi {
    pub fn new(
        add_use_case: Arc<dyn AddRelationUseCase<Uuid>>,
        remove_use_case: Arc<dyn RemoveRelationUseCase<Uuid>>,
        get_recipe_use_case: Arc<dyn GetRecipeByIdUseCase>,
        links: Links,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_recipe_use_case,
            links,
        }
    }
}

#[OpenApi]
impl FavoriteApi {
    /// Add a recipe to favorites
    #[oai(path = "/recipes/:id/favorite", method = "post", tag = "ApiTags::Favorites")]
    async fn add_favorite(&self, auth: BearerAuth, id: Path<String>) -> AddRecipeRelationResponse {
        add_recipe_relation(
            self.add_use_case.as_ref(),
            self.get_recipe_use_case.as_ref(),
            &self.links,
            auth.0,
            &id.0,
        )
        .await
    }

    /// Remove a recipe from favorites
    #[oai(path = "/recipes/:id/favorite", method = "delete", tag = "ApiTags::Favorites")]
    async fn remove_favorite(&self, auth: BearerAuth, id: Path<String>) -> RemoveRelationResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return RemoveRelationResponse::BadRequest(ErrorResponse::validation(
                "recipe.invalid_id",
            ));
        };

        let params = RelationParams {
            user_id: auth.0,
            target: recipe_id,
        };
        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveRelationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                RemoveRelationResponse::from_error(status.as_u16(), json)
            }
        }
    }
}
