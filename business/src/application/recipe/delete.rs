use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use crate::domain::relation::repository::RelationRepository;

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub cart: Arc<dyn RelationRepository<Uuid>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        self.logger.info(&format!(
            "Deleting recipe {} by {}",
            params.id, params.editor
        ));

        let recipe = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;
        if !recipe.is_authored_by(&params.editor) {
            return Err(RecipeError::Forbidden);
        }

        self.repository.delete(recipe.id).await?;
        self.logger.info(&format!("Recipe deleted: {}", recipe.id));

        // Best effort: leftover cart entries are skipped by the shopping list.
        match self.cart.delete_for_target(&recipe.id).await {
            Ok(removed) => self.logger.debug(&format!(
                "Removed {} cart entries of recipe {}",
                removed, recipe.id
            )),
            Err(e) => self.logger.warn(&format!(
                "Cart entries of recipe {} not removed: {}",
                recipe.id, e
            )),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockLog, MockRecipeRelationRepo, MockRecipeRepo, mock_logger, recipe,
    };

    fn untouched_cart() -> Arc<MockRecipeRelationRepo> {
        let mut cart = MockRecipeRelationRepo::new();
        cart.expect_delete_for_target().never();
        Arc::new(cart)
    }

    #[tokio::test]
    async fn should_delete_own_recipe() {
        let soup = recipe("chef", "Soup");
        let id = soup.id;
        let mut repository = MockRecipeRepo::new();
        repository
            .expect_get_by_id()
            .returning(move |_| Ok(soup.clone()));
        repository
            .expect_delete()
            .withf(move |deleted| *deleted == id)
            .times(1)
            .returning(|_| Ok(()));
        let mut cart = MockRecipeRelationRepo::new();
        cart.expect_delete_for_target()
            .withf(move |target| *target == id)
            .times(1)
            .returning(|_| Ok(2));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repository),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id,
                editor: UserId::new("chef"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forbid_deleting_foreign_recipe() {
        let soup = recipe("chef", "Soup");
        let id = soup.id;
        let mut repository = MockRecipeRepo::new();
        repository
            .expect_get_by_id()
            .returning(move |_| Ok(soup.clone()));
        repository.expect_delete().never();

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repository),
            cart: untouched_cart(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id,
                editor: UserId::new("someone-else"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::Forbidden));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_recipe() {
        let mut repository = MockRecipeRepo::new();
        repository
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repository),
            cart: untouched_cart(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: Uuid::new_v4(),
                editor: UserId::new("chef"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }

    #[tokio::test]
    async fn should_delete_recipe_even_when_cart_cleanup_fails() {
        let soup = recipe("chef", "Soup");
        let id = soup.id;
        let mut repository = MockRecipeRepo::new();
        repository
            .expect_get_by_id()
            .returning(move |_| Ok(soup.clone()));
        repository.expect_delete().times(1).returning(|_| Ok(()));
        let mut cart = MockRecipeRelationRepo::new();
        cart.expect_delete_for_target()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("not removed"))
            .times(1)
            .returning(|_| ());

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repository),
            cart: Arc::new(cart),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id,
                editor: UserId::new("chef"),
            })
            .await;

        assert!(result.is_ok());
    }
}
