//! mockall doubles for every port, shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::filter::RecipeFilter;
use crate::domain::recipe::image::RecipeImage;
use crate::domain::recipe::model::{Recipe, RecipeIngredient};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::services::ImageStorage;
use crate::domain::relation::model::RelationKind;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub IngredientRepo {}

    #[async_trait]
    impl IngredientRepository for IngredientRepo {
        async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
        async fn search_by_name(&self, query: &str) -> Result<Vec<Ingredient>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
        async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError>;
        async fn insert_if_absent(&self, ingredient: &Ingredient) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub TagRepo {}

    #[async_trait]
    impl TagRepository for TagRepo {
        async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError>;
        async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepositoryError>;
        async fn insert_if_absent(&self, tag: &Tag) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn get_page(&self, page: &PageRequest) -> Result<Page<User>, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub RecipeRepo {}

    #[async_trait]
    impl RecipeRepository for RecipeRepo {
        async fn get_page(&self, filter: &RecipeFilter, page: &PageRequest) -> Result<Page<Recipe>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
        async fn get_by_author(&self, author_id: &UserId, limit: u32) -> Result<Vec<Recipe>, RepositoryError>;
        async fn count_by_author(&self, author_id: &UserId) -> Result<u64, RepositoryError>;
        async fn get_ingredient_lines(&self, recipe_ids: &[Uuid]) -> Result<Vec<RecipeIngredient>, RepositoryError>;
        async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub RecipeRelationRepo {}

    #[async_trait]
    impl RelationRepository<Uuid> for RecipeRelationRepo {
        fn kind(&self) -> RelationKind;
        async fn target_exists(&self, target: &Uuid) -> Result<bool, RepositoryError>;
        async fn exists(&self, user_id: &UserId, target: &Uuid) -> Result<bool, RepositoryError>;
        async fn insert(&self, user_id: &UserId, target: &Uuid) -> Result<(), RepositoryError>;
        async fn delete(&self, user_id: &UserId, target: &Uuid) -> Result<bool, RepositoryError>;
        async fn delete_for_target(&self, target: &Uuid) -> Result<u64, RepositoryError>;
        async fn list_targets(&self, user_id: &UserId) -> Result<Vec<Uuid>, RepositoryError>;
    }
}

mock! {
    pub FollowRepo {}

    #[async_trait]
    impl RelationRepository<UserId> for FollowRepo {
        fn kind(&self) -> RelationKind;
        async fn target_exists(&self, target: &UserId) -> Result<bool, RepositoryError>;
        async fn exists(&self, user_id: &UserId, target: &UserId) -> Result<bool, RepositoryError>;
        async fn insert(&self, user_id: &UserId, target: &UserId) -> Result<(), RepositoryError>;
        async fn delete(&self, user_id: &UserId, target: &UserId) -> Result<bool, RepositoryError>;
        async fn delete_for_target(&self, target: &UserId) -> Result<u64, RepositoryError>;
        async fn list_targets(&self, user_id: &UserId) -> Result<Vec<UserId>, RepositoryError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl ImageStorage for Storage {
        async fn store(&self, image: &RecipeImage) -> Result<(), RecipeError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Relation repository that reports no relations at all.
pub fn empty_recipe_relations(kind: RelationKind) -> MockRecipeRelationRepo {
    let mut repo = MockRecipeRelationRepo::new();
    repo.expect_kind().return_const(kind);
    repo.expect_list_targets().returning(|_| Ok(vec![]));
    repo
}

pub fn empty_follows() -> MockFollowRepo {
    let mut repo = MockFollowRepo::new();
    repo.expect_kind().return_const(RelationKind::Follow);
    repo.expect_list_targets().returning(|_| Ok(vec![]));
    repo.expect_exists().returning(|_, _| Ok(false));
    repo
}

pub fn user(id: &str) -> User {
    User::from_repository(
        UserId::new(id),
        format!("{id}@example.com"),
        id.to_string(),
        "First".to_string(),
        "Last".to_string(),
        Utc::now(),
    )
}

pub fn tag(slug: &str) -> Tag {
    Tag::from_repository(
        Uuid::new_v4(),
        slug.to_string(),
        "#49B64E".to_string(),
        slug.to_string(),
    )
}

pub fn ingredient_line(id: Uuid, name: &str, unit: &str, amount: i32) -> RecipeIngredient {
    RecipeIngredient {
        ingredient_id: id,
        name: name.to_string(),
        measurement_unit: unit.to_string(),
        amount,
    }
}

pub fn recipe(author: &str, name: &str) -> Recipe {
    let now = Utc::now();
    Recipe::from_repository(
        Uuid::new_v4(),
        UserId::new(author),
        name.to_string(),
        "recipes/images/abc.png".to_string(),
        "Mix everything.".to_string(),
        15,
        vec![ingredient_line(Uuid::new_v4(), "flour", "g", 200)],
        vec![tag("breakfast")],
        now,
        now,
    )
}

/// 1x1 transparent PNG as an upload payload.
pub const PIXEL_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
