use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Json, PlainText},
};
use uuid::Uuid;

use business::domain::recipe::use_cases::get_by_id::GetRecipeByIdUseCase;
use business::domain::relation::use_cases::add::{AddRelationUseCase, RelationParams};
use business::domain::relation::use_cases::remove::RemoveRelationUseCase;
use business::domain::shopping_list::model::SHOPPING_LIST_FILENAME;
use business::domain::shopping_list::use_cases::aggregate::{
    GetShoppingListParams, GetShoppingListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::Links;
use crate::api::relation::handler::add_recipe_relation;
use crate::api::relation::responses::{AddRecipeRelationResponse, RemoveRelationResponse};
use crate::api::security::BearerAuth;
use crate::api::shopping_cart::dto::ShoppingListResponse;
use crate::api::tags::ApiTags;

pub struct ShoppingCartApi {
    add_use_case: Arc<dyn AddRelationUseCase<Uuid>>,
    remove_use_case: Arc<dyn RemoveRelationUseCase<Uuid>>,
    get_recipe_use_case: Arc<dyn GetRecipeByIdUseCase>,
    shopping_list_use_case: Arc<dyn GetShoppingListUseCase>,
    links: Links,
}

impl ShoppingCartApi {
    pub fn new(
        add_use_case: Arc<dyn AddRelationUseCase<Uuid>>,
        remove_use_case: Arc<dyn RemoveRelationUseCase<Uuid>>,
        get_recipe_use_case: Arc<dyn GetRecipeByIdUseCase>,
        shopping_list_use_case: Arc<dyn GetShoppingListUseCase>,
        links: Links,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_recipe_use_case,
            shopping_list_use_case,
            links,
        }
    }
}

fn attachment_header() -> String {
    format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILENAME)
}

/// Shopping cart API
///
/// The cart is a set of recipes. Its shopping list sums the ingredient
/// amounts of every recipe in it, one line per ingredient and unit.
#[OpenApi]
impl ShoppingCartApi {
    /// Add a recipe to the cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "post",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn add_to_cart(&self, auth: BearerAuth, id: Path<String>) -> AddRecipeRelationResponse {
        add_recipe_relation(
            self.add_use_case.as_ref(),
            self.get_recipe_use_case.as_ref(),
            &self.links,
            auth.0,
            &id.0,
        )
        .await
    }

    /// Remove a recipe from the cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "delete",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn remove_from_cart(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> RemoveRelationResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return RemoveRelationResponse::BadRequest(ErrorResponse::validation(
                "recipe.invalid_id",
            ));
        };

        let params = RelationParams {
            user_id: auth.0,
            target: recipe_id,
        };
        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveRelationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                RemoveRelationResponse::from_error(status.as_u16(), json)
            }
        }
    }

    /// Aggregated shopping list
    ///
    /// Lines are sorted by ingredient name, then unit.
    #[oai(
        path = "/recipes/shopping_cart",
        method = "get",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn get_shopping_list(&self, auth: BearerAuth) -> GetShoppingListResponse {
        let params = GetShoppingListParams { user_id: auth.0 };
        match self.shopping_list_use_case.execute(params).await {
            Ok(list) => GetShoppingListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetShoppingListResponse::InternalError(json)
            }
        }
    }

    /// Download the shopping list
    ///
    /// Plain text attachment named `shopping_list.txt`.
    #[oai(
        path = "/recipes/download_shopping_cart",
        method = "get",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn download_shopping_list(&self, auth: BearerAuth) -> DownloadShoppingListResponse {
        let params = GetShoppingListParams { user_id: auth.0 };
        match self.shopping_list_use_case.execute(params).await {
            Ok(list) => DownloadShoppingListResponse::Ok(PlainText(list.render()), attachment_header()),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DownloadShoppingListResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadShoppingListResponse {
    #[oai(status = 200)]
    Ok(
        PlainText<String>,
        #[oai(header = "Content-Disposition")] String,
    ),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_download_attachment() {
        assert_eq!(
            attachment_header(),
            "attachment; filename=\"shopping_list.txt\""
        );
    }
}
