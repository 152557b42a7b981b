use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    /// Rejected request input that never reached a use case.
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub(crate) fn error_pair(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(name, message)))
}
