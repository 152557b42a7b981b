use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::recipe::filter::{RecipeQuery, parse_flag};
use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_all::{GetRecipesParams, GetRecipesUseCase};
use business::domain::recipe::use_cases::get_by_id::{
    GetRecipeByIdParams, GetRecipeByIdUseCase,
};
use business::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use business::domain::shared::pagination::PageRequest;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::Links;
use crate::api::recipe::dto::{
    CreateRecipeRequest, RecipePageResponse, RecipeResponse, UpdateRecipeRequest,
};
use crate::api::security::{BearerAuth, optional_viewer};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    get_all_use_case: Arc<dyn GetRecipesUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    update_use_case: Arc<dyn UpdateRecipeUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    links: Links,
}

impl RecipeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        get_all_use_case: Arc<dyn GetRecipesUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
        update_use_case: Arc<dyn UpdateRecipeUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
        links: Links,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            links,
        }
    }
}

/// Recipe management API
///
/// Reading is open to everyone. A valid bearer token adds the viewer's
/// favorite, cart and subscription flags.
#[OpenApi]
impl RecipeApi {
    /// List recipes
    ///
    /// Newest first. `tags` may be repeated and matches any of the slugs.
    /// `is_favorited` and `is_in_shopping_cart` accept `1` or `true` and
    /// are ignored for anonymous callers.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipes(
        &self,
        req: &Request,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
        tags: Query<Option<Vec<String>>>,
        author: Query<Option<String>>,
        is_favorited: Query<Option<String>>,
        is_in_shopping_cart: Query<Option<String>>,
    ) -> GetRecipesResponse {
        let params = GetRecipesParams {
            query: RecipeQuery {
                tags: tags.0.unwrap_or_default(),
                author: author.0.filter(|a| !a.trim().is_empty()).map(UserId::from),
                is_favorited: parse_flag(is_favorited.0.as_deref()),
                is_in_shopping_cart: parse_flag(is_in_shopping_cart.0.as_deref()),
            },
            viewer: optional_viewer(req),
            page: PageRequest::new(page.0, limit.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => {
                let (next, previous) = self.links.neighbours(req.original_uri(), &page);
                GetRecipesResponse::Ok(Json(RecipePageResponse::new(
                    page,
                    &self.links,
                    next,
                    previous,
                )))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetRecipesResponse::InternalError(json)
            }
        }
    }

    /// Create a recipe
    ///
    /// The caller becomes the author and must have a profile (`PUT /users/me`).
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create_recipe(
        &self,
        auth: BearerAuth,
        body: Json<CreateRecipeRequest>,
    ) -> CreateRecipeResponse {
        let body = body.0;
        let params = CreateRecipeParams {
            author_id: auth.0,
            name: body.name,
            image: body.image,
            text: body.text,
            cooking_time: body.cooking_time,
            ingredients: body.ingredients.into_iter().map(Into::into).collect(),
            tags: body.tags,
        };

        match self.create_use_case.execute(params).await {
            Ok(details) => {
                CreateRecipeResponse::Created(Json(RecipeResponse::new(details, &self.links)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecipeResponse::BadRequest(json),
                    _ => CreateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a recipe
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipe(&self, req: &Request, id: Path<String>) -> GetRecipeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetRecipeResponse::BadRequest(ErrorResponse::validation("recipe.invalid_id"));
        };

        let params = GetRecipeByIdParams {
            id,
            viewer: optional_viewer(req),
        };
        match self.get_by_id_use_case.execute(params).await {
            Ok(details) => GetRecipeResponse::Ok(Json(RecipeResponse::new(details, &self.links))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeResponse::NotFound(json),
                    _ => GetRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a recipe
    ///
    /// Author only. Omitted fields are left unchanged; a submitted
    /// ingredient or tag list replaces the current one.
    #[oai(path = "/recipes/:id", method = "patch", tag = "ApiTags::Recipes")]
    async fn update_recipe(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateRecipeRequest>,
    ) -> UpdateRecipeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateRecipeResponse::BadRequest(ErrorResponse::validation(
                "recipe.invalid_id",
            ));
        };

        let body = body.0;
        let params = UpdateRecipeParams {
            id,
            editor: auth.0,
            name: body.name,
            image: body.image,
            text: body.text,
            cooking_time: body.cooking_time,
            ingredients: body
                .ingredients
                .map(|items| items.into_iter().map(Into::into).collect()),
            tags: body.tags,
        };

        match self.update_use_case.execute(params).await {
            Ok(details) => {
                UpdateRecipeResponse::Ok(Json(RecipeResponse::new(details, &self.links)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateRecipeResponse::BadRequest(json),
                    403 => UpdateRecipeResponse::Forbidden(json),
                    404 => UpdateRecipeResponse::NotFound(json),
                    _ => UpdateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a recipe
    ///
    /// Author only.
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete_recipe(&self, auth: BearerAuth, id: Path<String>) -> DeleteRecipeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteRecipeResponse::BadRequest(ErrorResponse::validation(
                "recipe.invalid_id",
            ));
        };

        let params = DeleteRecipeParams {
            id,
            editor: auth.0,
        };
        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteRecipeResponse::Forbidden(json),
                    404 => DeleteRecipeResponse::NotFound(json),
                    _ => DeleteRecipeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<RecipePageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
