use poem_openapi::Object;
use uuid::Uuid;

use business::domain::recipe::model::{
    IngredientAmount, RecipeDetails, RecipeIngredient, RecipeSummary,
};
use business::domain::shared::pagination::Page;

use crate::api::links::Links;
use crate::api::tag::dto::TagResponse;
use crate::api::user::dto::UserResponse;

#[derive(Debug, Clone, Object)]
pub struct IngredientAmountRequest {
    /// Ingredient id
    pub id: Uuid,
    /// Quantity in the ingredient's unit, at least 1
    pub amount: i32,
}

impl From<IngredientAmountRequest> for IngredientAmount {
    fn from(dto: IngredientAmountRequest) -> Self {
        IngredientAmount {
            ingredient_id: dto.id,
            amount: dto.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateRecipeRequest {
    pub ingredients: Vec<IngredientAmountRequest>,
    /// Tag ids
    pub tags: Vec<Uuid>,
    /// `data:image/<png|jpeg|gif|webp>;base64,<payload>`
    pub image: String,
    pub name: String,
    pub text: String,
    /// Minutes, at least 1
    pub cooking_time: i32,
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct UpdateRecipeRequest {
    pub ingredients: Option<Vec<IngredientAmountRequest>>,
    pub tags: Option<Vec<Uuid>>,
    pub image: Option<String>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(line: RecipeIngredient) -> Self {
        Self {
            id: line.ingredient_id,
            name: line.name,
            measurement_unit: line.measurement_unit,
            amount: line.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub tags: Vec<TagResponse>,
    pub author: UserResponse,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    /// Absolute image URL
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

impl RecipeResponse {
    pub fn new(details: RecipeDetails, links: &Links) -> Self {
        let recipe = details.recipe;
        Self {
            id: recipe.id,
            tags: recipe.tags.into_iter().map(Into::into).collect(),
            author: details.author.into(),
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            is_favorited: details.is_favorited,
            is_in_shopping_cart: details.is_in_shopping_cart,
            name: recipe.name,
            image: links.media(&recipe.image),
            text: recipe.text,
            cooking_time: recipe.cooking_time,
        }
    }
}

/// Short recipe form used by favorites, the cart and subscriptions.
#[derive(Debug, Clone, Object)]
pub struct RecipeSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl RecipeSummaryResponse {
    pub fn new(summary: RecipeSummary, links: &Links) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            image: links.media(&summary.image),
            cooking_time: summary.cooking_time,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipePageResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<RecipeResponse>,
}

impl RecipePageResponse {
    pub fn new(
        page: Page<RecipeDetails>,
        links: &Links,
        next: Option<String>,
        previous: Option<String>,
    ) -> Self {
        Self {
            count: page.count,
            next,
            previous,
            results: page
                .items
                .into_iter()
                .map(|details| RecipeResponse::new(details, links))
                .collect(),
        }
    }
}
