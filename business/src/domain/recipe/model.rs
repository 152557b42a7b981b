use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RecipeError;
use crate::domain::shared::value_objects::UserId;
use crate::domain::tag::model::Tag;
use crate::domain::user::model::UserProfile;

const MAX_NAME_LENGTH: usize = 200;

/// One ingredient line of a recipe, joined with its catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient_id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Ingredient reference as submitted by an author.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientAmount {
    pub ingredient_id: Uuid,
    pub amount: i32,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Uuid,
    pub author_id: UserId,
    pub name: String,
    /// Media-relative image path.
    pub image: String,
    pub text: String,
    /// Minutes.
    pub cooking_time: i32,
    pub ingredients: Vec<RecipeIngredient>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewRecipeProps {
    pub author_id: UserId,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub ingredients: Vec<RecipeIngredient>,
    pub tags: Vec<Tag>,
}

/// Checks an author's ingredient list: non-empty, no repeats, amounts >= 1.
pub fn validate_ingredient_amounts(items: &[IngredientAmount]) -> Result<(), RecipeError> {
    if items.is_empty() {
        return Err(RecipeError::IngredientsEmpty);
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.ingredient_id) {
            return Err(RecipeError::DuplicateIngredient);
        }
        if item.amount < 1 {
            return Err(RecipeError::InvalidAmount);
        }
    }
    Ok(())
}

/// Checks an author's tag list: non-empty, no repeats.
pub fn validate_tag_ids(ids: &[Uuid]) -> Result<(), RecipeError> {
    if ids.is_empty() {
        return Err(RecipeError::TagsEmpty);
    }
    let unique: HashSet<&Uuid> = ids.iter().collect();
    if unique.len() != ids.len() {
        return Err(RecipeError::DuplicateTag);
    }
    Ok(())
}

impl Recipe {
    pub fn new(props: NewRecipeProps) -> Result<Self, RecipeError> {
        let now = Utc::now();
        let mut recipe = Self {
            id: Uuid::new_v4(),
            author_id: props.author_id.clone(),
            name: String::new(),
            image: String::new(),
            text: String::new(),
            cooking_time: 0,
            ingredients: Vec::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        recipe.apply(props)?;
        Ok(recipe)
    }

    /// Replaces the editable content, keeping identity, author and creation date.
    pub fn revise(mut self, props: NewRecipeProps) -> Result<Self, RecipeError> {
        self.apply(props)?;
        self.updated_at = Utc::now();
        Ok(self)
    }

    fn apply(&mut self, props: NewRecipeProps) -> Result<(), RecipeError> {
        let NewRecipeProps {
            name,
            image,
            text,
            cooking_time,
            ingredients,
            tags,
            ..
        } = props;
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RecipeError::NameEmpty);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RecipeError::NameTooLong);
        }
        if text.trim().is_empty() {
            return Err(RecipeError::TextEmpty);
        }
        if cooking_time < 1 {
            return Err(RecipeError::InvalidCookingTime);
        }
        if image.is_empty() {
            return Err(RecipeError::InvalidImage);
        }

        let amounts: Vec<IngredientAmount> = ingredients
            .iter()
            .map(|i| IngredientAmount {
                ingredient_id: i.ingredient_id,
                amount: i.amount,
            })
            .collect();
        validate_ingredient_amounts(&amounts)?;
        let tag_ids: Vec<Uuid> = tags.iter().map(|t| t.id).collect();
        validate_tag_ids(&tag_ids)?;

        self.name = name;
        self.image = image;
        self.text = text;
        self.cooking_time = cooking_time;
        self.ingredients = ingredients;
        self.tags = tags;
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        author_id: UserId,
        name: String,
        image: String,
        text: String,
        cooking_time: i32,
        ingredients: Vec<RecipeIngredient>,
        tags: Vec<Tag>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            name,
            image,
            text,
            cooking_time,
            ingredients,
            tags,
            created_at,
            updated_at,
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name.clone(),
            image: self.image.clone(),
            cooking_time: self.cooking_time,
        }
    }
}

/// Short form used in favorites, cart and subscription previews.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// A recipe as seen by a viewer.
#[derive(Debug, Clone)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub author: UserProfile,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}
