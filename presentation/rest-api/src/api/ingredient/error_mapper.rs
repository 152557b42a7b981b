use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            IngredientError::NameEmpty | IngredientError::MeasurementUnitEmpty => {
                error_pair(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            IngredientError::NotFound => {
                error_pair(StatusCode::NOT_FOUND, "NotFound", "ingredient.not_found")
            }
            IngredientError::Repository(_) => error_pair(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
