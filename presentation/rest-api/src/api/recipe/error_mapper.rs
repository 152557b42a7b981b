use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            RecipeError::NotFound => error_pair(StatusCode::NOT_FOUND, "NotFound", &message),
            RecipeError::Forbidden => error_pair(StatusCode::FORBIDDEN, "Forbidden", &message),
            RecipeError::ImageStorage | RecipeError::Repository(_) => error_pair(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                &message,
            ),
            // Everything else is a rejected payload: field validation,
            // unknown ingredient or tag ids, undecodable image, no profile.
            _ => error_pair(StatusCode::BAD_REQUEST, "ValidationError", &message),
        }
    }
}
