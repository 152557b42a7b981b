use poem_openapi::payload::Json;

use crate::api::error::ErrorResponse;
use crate::api::recipe::dto::RecipeSummaryResponse;

/// Responses shared by the favorite and shopping cart toggles.
#[derive(poem_openapi::ApiResponse)]
pub enum AddRecipeRelationResponse {
    #[oai(status = 201)]
    Created(Json<RecipeSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveRelationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl RemoveRelationResponse {
    pub fn from_error(status: u16, json: Json<ErrorResponse>) -> Self {
        match status {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

impl AddRecipeRelationResponse {
    pub fn from_error(status: u16, json: Json<ErrorResponse>) -> Self {
        match status {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
