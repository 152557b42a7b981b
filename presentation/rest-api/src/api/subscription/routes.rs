use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::relation::use_cases::add::{AddRelationUseCase, RelationParams};
use business::domain::relation::use_cases::remove::RemoveRelationUseCase;
use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::UserId;
use business::domain::user::use_cases::subscriptions::{
    GetSubscriptionParams, GetSubscriptionUseCase, GetSubscriptionsParams,
    GetSubscriptionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::Links;
use crate::api::relation::responses::RemoveRelationResponse;
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{SubscriptionPageResponse, SubscriptionResponse};

pub struct SubscriptionApi {
    follow_use_case: Arc<dyn AddRelationUseCase<UserId>>,
    unfollow_use_case: Arc<dyn RemoveRelationUseCase<UserId>>,
    get_all_use_case: Arc<dyn GetSubscriptionsUseCase>,
    get_one_use_case: Arc<dyn GetSubscriptionUseCase>,
    links: Links,
}

impl SubscriptionApi {
    pub fn new(
        follow_use_case: Arc<dyn AddRelationUseCase<UserId>>,
        unfollow_use_case: Arc<dyn RemoveRelationUseCase<UserId>>,
        get_all_use_case: Arc<dyn GetSubscriptionsUseCase>,
        get_one_use_case: Arc<dyn GetSubscriptionUseCase>,
        links: Links,
    ) -> Self {
        Self {
            follow_use_case,
            unfollow_use_case,
            get_all_use_case,
            get_one_use_case,
            links,
        }
    }
}

/// Followed authors
#[OpenApi]
impl SubscriptionApi {
    /// List followed authors
    ///
    /// Each entry previews the author's newest recipes, at most
    /// `recipes_limit` (default 10).
    #[oai(path = "/users/subscriptions", method = "get", tag = "ApiTags::Subscriptions")]
    async fn get_subscriptions(
        &self,
        req: &Request,
        auth: BearerAuth,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
        recipes_limit: Query<Option<u32>>,
    ) -> GetSubscriptionsResponse {
        let params = GetSubscriptionsParams {
            user_id: auth.0,
            page: PageRequest::new(page.0, limit.0),
            recipes_limit: recipes_limit.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => {
                let (next, previous) = self.links.neighbours(req.original_uri(), &page);
                GetSubscriptionsResponse::Ok(Json(SubscriptionPageResponse {
                    count: page.count,
                    next,
                    previous,
                    results: page
                        .items
                        .into_iter()
                        .map(|entry| SubscriptionResponse::new(entry, &self.links))
                        .collect(),
                }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSubscriptionsResponse::InternalError(json)
            }
        }
    }

    /// Follow an author
    #[oai(path = "/users/:id/subscribe", method = "post", tag = "ApiTags::Subscriptions")]
    async fn subscribe(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        recipes_limit: Query<Option<u32>>,
    ) -> SubscribeResponse {
        let author_id = UserId::from(id.0);
        let params = RelationParams {
            user_id: auth.0,
            target: author_id.clone(),
        };
        if let Err(err) = self.follow_use_case.execute(params).await {
            let (status, json) = err.into_error_response();
            return SubscribeResponse::from_error(status.as_u16(), json);
        }

        let params = GetSubscriptionParams {
            author_id,
            recipes_limit: recipes_limit.0,
        };
        match self.get_one_use_case.execute(params).await {
            Ok(entry) => {
                SubscribeResponse::Created(Json(SubscriptionResponse::new(entry, &self.links)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                SubscribeResponse::from_error(status.as_u16(), json)
            }
        }
    }

    /// Unfollow an author
    #[oai(path = "/users/:id/subscribe", method = "delete", tag = "ApiTags::Subscriptions")]
    async fn unsubscribe(&self, auth: BearerAuth, id: Path<String>) -> RemoveRelationResponse {
        let params = RelationParams {
            user_id: auth.0,
            target: UserId::from(id.0),
        };
        match self.unfollow_use_case.execute(params).await {
            Ok(()) => RemoveRelationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                RemoveRelationResponse::from_error(status.as_u16(), json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSubscriptionsResponse {
    #[oai(status = 200)]
    Ok(Json<SubscriptionPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubscribeResponse {
    #[oai(status = 201)]
    Created(Json<SubscriptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SubscribeResponse {
    fn from_error(status: u16, json: Json<ErrorResponse>) -> Self {
        match status {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
