use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ShoppingListError::Repository(_) => error_pair(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
