use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tag::errors::TagError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for TagError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            TagError::NameEmpty | TagError::InvalidColor | TagError::InvalidSlug => {
                error_pair(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            TagError::NotFound => error_pair(StatusCode::NOT_FOUND, "NotFound", "tag.not_found"),
            TagError::Repository(_) => error_pair(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
