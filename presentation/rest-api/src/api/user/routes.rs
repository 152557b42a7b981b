use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::UserId;
use business::domain::user::use_cases::get_all::{GetUsersParams, GetUsersUseCase};
use business::domain::user::use_cases::get_by_id::{GetUserParams, GetUserUseCase};
use business::domain::user::use_cases::upsert::{UpsertProfileParams, UpsertProfileUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::Links;
use crate::api::security::{BearerAuth, optional_viewer};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UpsertProfileRequest, UserPageResponse, UserResponse};

pub struct UserApi {
    get_all_use_case: Arc<dyn GetUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserUseCase>,
    upsert_use_case: Arc<dyn UpsertProfileUseCase>,
    links: Links,
}

impl UserApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserUseCase>,
        upsert_use_case: Arc<dyn UpsertProfileUseCase>,
        links: Links,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            upsert_use_case,
            links,
        }
    }
}

/// Author profiles
///
/// Profiles are keyed by the bearer token subject. A user becomes visible
/// once they call `PUT /users/me`.
#[OpenApi]
impl UserApi {
    /// List users
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_users(
        &self,
        req: &Request,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> GetUsersResponse {
        let params = GetUsersParams {
            viewer: optional_viewer(req),
            page: PageRequest::new(page.0, limit.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => {
                let (next, previous) = self.links.neighbours(req.original_uri(), &page);
                GetUsersResponse::Ok(Json(UserPageResponse::new(page, next, previous)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetUsersResponse::InternalError(json)
            }
        }
    }

    /// Own profile
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn get_me(&self, auth: BearerAuth) -> GetUserResponse {
        let params = GetUserParams {
            id: auth.0,
            viewer: None,
        };
        self.get_user(params).await
    }

    /// Create or update own profile
    #[oai(path = "/users/me", method = "put", tag = "ApiTags::Users")]
    async fn upsert_me(
        &self,
        auth: BearerAuth,
        body: Json<UpsertProfileRequest>,
    ) -> UpsertProfileResponse {
        let body = body.0;
        let params = UpsertProfileParams {
            user_id: auth.0,
            email: body.email,
            username: body.username,
            first_name: body.first_name,
            last_name: body.last_name,
        };

        match self.upsert_use_case.execute(params).await {
            Ok(user) => UpsertProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpsertProfileResponse::BadRequest(json),
                    _ => UpsertProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, req: &Request, id: Path<String>) -> GetUserResponse {
        let params = GetUserParams {
            id: UserId::from(id.0),
            viewer: optional_viewer(req),
        };
        self.get_user(params).await
    }
}

impl UserApi {
    async fn get_user(&self, params: GetUserParams) -> GetUserResponse {
        match self.get_by_id_use_case.execute(params).await {
            Ok(profile) => GetUserResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetUserResponse::NotFound(json),
                    _ => GetUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUsersResponse {
    #[oai(status = 200)]
    Ok(Json<UserPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpsertProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
