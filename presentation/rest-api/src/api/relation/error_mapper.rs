use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::relation::errors::RelationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for RelationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            RelationError::AlreadyExists | RelationError::SelfReference => {
                error_pair(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            RelationError::NotFound | RelationError::TargetNotFound => {
                error_pair(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            RelationError::Repository(_) => error_pair(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                &message,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_reject_duplicates_and_self_follow_as_bad_request() {
        let (status, json) = RelationError::AlreadyExists.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "relation.already_exists");

        let (status, _) = RelationError::SelfReference.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_missing_relation_and_target_to_not_found() {
        let (status, _) = RelationError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = RelationError::TargetNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_storage_failures() {
        let (status, json) =
            RelationError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
