use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::recipe::model::{Recipe, RecipeIngredient};
use business::domain::shared::value_objects::UserId;
use business::domain::tag::model::Tag;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub author_id: String,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self, ingredients: Vec<RecipeIngredient>, tags: Vec<Tag>) -> Recipe {
        Recipe::from_repository(
            self.id,
            UserId::new(self.author_id),
            self.name,
            self.image,
            self.text,
            self.cooking_time,
            ingredients,
            tags,
            self.created_at,
            self.updated_at,
        )
    }
}

/// One ingredient line joined with its catalogue entry.
#[derive(Debug, FromRow)]
pub struct RecipeIngredientRow {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl RecipeIngredientRow {
    pub fn into_domain(self) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id: self.ingredient_id,
            name: self.name,
            measurement_unit: self.measurement_unit,
            amount: self.amount,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct RecipeTagRow {
    pub recipe_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl RecipeTagRow {
    pub fn into_domain(self) -> Tag {
        Tag::from_repository(self.id, self.name, self.color, self.slug)
    }
}
