use poem_openapi::payload::Json;
use uuid::Uuid;

use business::domain::recipe::use_cases::get_by_id::{
    GetRecipeByIdParams, GetRecipeByIdUseCase,
};
use business::domain::relation::use_cases::add::{AddRelationUseCase, RelationParams};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::Links;
use crate::api::recipe::dto::RecipeSummaryResponse;
use crate::api::relation::responses::AddRecipeRelationResponse;

/// Adds a recipe to one of the caller's recipe relations.
///
/// The recipe is read before the insert and the 201 body is built from that
/// read; once the entry is stored the answer is always 201.
pub async fn add_recipe_relation(
    add_use_case: &dyn AddRelationUseCase<Uuid>,
    get_recipe_use_case: &dyn GetRecipeByIdUseCase,
    links: &Links,
    user_id: UserId,
    id: &str,
) -> AddRecipeRelationResponse {
    let Ok(recipe_id) = Uuid::parse_str(id) else {
        return AddRecipeRelationResponse::BadRequest(ErrorResponse::validation(
            "recipe.invalid_id",
        ));
    };

    let params = GetRecipeByIdParams {
        id: recipe_id,
        viewer: Some(user_id.clone()),
    };
    let details = match get_recipe_use_case.execute(params).await {
        Ok(details) => details,
        Err(err) => {
            let (status, json) = err.into_error_response();
            return AddRecipeRelationResponse::from_error(status.as_u16(), json);
        }
    };

    let params = RelationParams {
        user_id,
        target: recipe_id,
    };
    match add_use_case.execute(params).await {
        Ok(()) => AddRecipeRelationResponse::Created(Json(RecipeSummaryResponse::new(
            details.recipe.summary(),
            links,
        ))),
        Err(err) => {
            let (status, json) = err.into_error_response();
            AddRecipeRelationResponse::from_error(status.as_u16(), json)
        }
    }
}
