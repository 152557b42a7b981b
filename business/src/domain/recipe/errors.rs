#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.name_empty")]
    NameEmpty,
    #[error("recipe.name_too_long")]
    NameTooLong,
    #[error("recipe.text_empty")]
    TextEmpty,
    #[error("recipe.invalid_cooking_time")]
    InvalidCookingTime,
    #[error("recipe.ingredients_empty")]
    IngredientsEmpty,
    #[error("recipe.duplicate_ingredient")]
    DuplicateIngredient,
    #[error("recipe.invalid_amount")]
    InvalidAmount,
    #[error("recipe.tags_empty")]
    TagsEmpty,
    #[error("recipe.duplicate_tag")]
    DuplicateTag,
    #[error("recipe.ingredient_not_found")]
    IngredientNotFound,
    #[error("recipe.tag_not_found")]
    TagNotFound,
    #[error("recipe.invalid_image")]
    InvalidImage,
    #[error("recipe.image_storage_failed")]
    ImageStorage,
    #[error("recipe.author_profile_missing")]
    AuthorProfileMissing,
    #[error("recipe.forbidden")]
    Forbidden,
    #[error("recipe.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
