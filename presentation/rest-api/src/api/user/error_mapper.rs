use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            UserError::InvalidEmail
            | UserError::InvalidUsername
            | UserError::FirstNameEmpty
            | UserError::LastNameEmpty
            | UserError::AlreadyExists => {
                error_pair(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            UserError::NotFound => error_pair(StatusCode::NOT_FOUND, "NotFound", &message),
            UserError::Repository(_) => error_pair(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                &message,
            ),
        }
    }
}
