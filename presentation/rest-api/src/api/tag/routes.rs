use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::tag::use_cases::get_all::GetTagsUseCase;
use business::domain::tag::use_cases::get_by_id::{GetTagByIdParams, GetTagByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tag::dto::TagResponse;
use crate::api::tags::ApiTags;

pub struct TagApi {
    get_all_use_case: Arc<dyn GetTagsUseCase>,
    get_by_id_use_case: Arc<dyn GetTagByIdUseCase>,
}

impl TagApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetTagsUseCase>,
        get_by_id_use_case: Arc<dyn GetTagByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Recipe tags (read-only)
#[OpenApi]
impl TagApi {
    /// List tags
    #[oai(path = "/tags", method = "get", tag = "ApiTags::Tags")]
    async fn get_all(&self) -> GetTagsResponse {
        match self.get_all_use_case.execute().await {
            Ok(tags) => GetTagsResponse::Ok(Json(tags.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTagsResponse::InternalError(json)
            }
        }
    }

    /// Get a tag
    #[oai(path = "/tags/:id", method = "get", tag = "ApiTags::Tags")]
    async fn get_by_id(&self, id: Path<String>) -> GetTagResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetTagResponse::BadRequest(ErrorResponse::validation("tag.invalid_id"));
        };

        match self.get_by_id_use_case.execute(GetTagByIdParams { id }).await {
            Ok(tag) => GetTagResponse::Ok(Json(tag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetTagResponse::NotFound(json),
                    _ => GetTagResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTagsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TagResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTagResponse {
    #[oai(status = 200)]
    Ok(Json<TagResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
