use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::ingredient::use_cases::get_all::{
    GetIngredientsParams, GetIngredientsUseCase,
};
use business::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::IngredientResponse;
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    get_all_use_case: Arc<dyn GetIngredientsUseCase>,
    get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
}

impl IngredientApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetIngredientsUseCase>,
        get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Ingredient catalogue (read-only)
#[OpenApi]
impl IngredientApi {
    /// List or search ingredients
    ///
    /// With `name`, returns case-insensitive matches: names starting with
    /// the query first, then names containing it.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_all(&self, name: Query<Option<String>>) -> GetIngredientsResponse {
        match self
            .get_all_use_case
            .execute(GetIngredientsParams { name: name.0 })
            .await
        {
            Ok(items) => {
                GetIngredientsResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetIngredientsResponse::InternalError(json)
            }
        }
    }

    /// Get an ingredient
    #[oai(path = "/ingredients/:id", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_by_id(&self, id: Path<String>) -> GetIngredientResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetIngredientResponse::BadRequest(ErrorResponse::validation(
                "ingredient.invalid_id",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetIngredientByIdParams { id })
            .await
        {
            Ok(ingredient) => GetIngredientResponse::Ok(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetIngredientResponse::NotFound(json),
                    _ => GetIngredientResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIngredientResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
