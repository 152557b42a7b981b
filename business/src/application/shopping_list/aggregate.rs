use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::shopping_list::aggregator::aggregate_lines;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::aggregate::{
    GetShoppingListParams, GetShoppingListUseCase,
};

/// Builds the caller's shopping list from the recipes in their cart.
pub struct GetShoppingListUseCaseImpl {
    pub cart: Arc<dyn RelationRepository<Uuid>>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListUseCase for GetShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Building shopping list for user {}",
            params.user_id
        ));

        let recipe_ids = self.cart.list_targets(&params.user_id).await?;
        if recipe_ids.is_empty() {
            return Ok(ShoppingList::default());
        }

        let lines = self.recipes.get_ingredient_lines(&recipe_ids).await?;
        let aggregation = aggregate_lines(lines);

        for line in &aggregation.skipped {
            self.logger.warn(&format!(
                "Skipping ingredient {} with non-positive amount {}",
                line.ingredient_id, line.amount
            ));
        }

        self.logger.info(&format!(
            "Shopping list built: {} recipes, {} lines",
            recipe_ids.len(),
            aggregation.lines.len()
        ));
        Ok(ShoppingList {
            lines: aggregation.lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::relation::model::RelationKind;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockLog, MockRecipeRelationRepo, MockRecipeRepo, ingredient_line, mock_logger,
    };

    fn cart_with(ids: Vec<Uuid>) -> MockRecipeRelationRepo {
        let mut cart = MockRecipeRelationRepo::new();
        cart.expect_kind().return_const(RelationKind::ShoppingCart);
        cart.expect_list_targets()
            .returning(move |_| Ok(ids.clone()));
        cart
    }

    #[tokio::test]
    async fn should_return_title_only_for_empty_cart() {
        let mut recipes = MockRecipeRepo::new();
        recipes.expect_get_ingredient_lines().never();

        let use_case = GetShoppingListUseCaseImpl {
            cart: Arc::new(cart_with(vec![])),
            recipes: Arc::new(recipes),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(GetShoppingListParams {
                user_id: UserId::new("1"),
            })
            .await
            .unwrap();

        assert!(list.lines.is_empty());
        assert_eq!(list.render(), "Shopping list:\n");
    }

    #[tokio::test]
    async fn should_sum_ingredients_across_cart_recipes() {
        let pancakes = Uuid::from_u128(1);
        let cookies = Uuid::from_u128(2);
        let flour = Uuid::from_u128(10);
        let egg = Uuid::from_u128(11);
        let sugar = Uuid::from_u128(12);

        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_get_ingredient_lines()
            .withf(move |ids| ids.to_vec() == vec![pancakes, cookies])
            .returning(move |_| {
                Ok(vec![
                    ingredient_line(flour, "flour", "g", 200),
                    ingredient_line(egg, "egg", "pcs", 3),
                    ingredient_line(flour, "flour", "g", 100),
                    ingredient_line(sugar, "sugar", "g", 50),
                ])
            });

        let use_case = GetShoppingListUseCaseImpl {
            cart: Arc::new(cart_with(vec![pancakes, cookies])),
            recipes: Arc::new(recipes),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(GetShoppingListParams {
                user_id: UserId::new("1"),
            })
            .await
            .unwrap();

        assert_eq!(
            list.render(),
            "Shopping list:\negg - 3 pcs\nflour - 300 g\nsugar - 50 g\n"
        );
    }

    #[tokio::test]
    async fn should_ignore_cart_entries_of_deleted_recipes() {
        let omelette = Uuid::from_u128(1);
        let deleted = Uuid::from_u128(2);
        let egg = Uuid::from_u128(11);
        let butter = Uuid::from_u128(13);

        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_get_ingredient_lines()
            .withf(move |ids| ids.to_vec() == vec![omelette, deleted])
            .times(1)
            .returning(move |_| {
                Ok(vec![
                    ingredient_line(egg, "egg", "pcs", 2),
                    ingredient_line(butter, "butter", "g", 10),
                ])
            });

        let use_case = GetShoppingListUseCaseImpl {
            cart: Arc::new(cart_with(vec![omelette, deleted])),
            recipes: Arc::new(recipes),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(GetShoppingListParams {
                user_id: UserId::new("1"),
            })
            .await
            .unwrap();

        assert_eq!(list.lines.len(), 2);
        assert_eq!(
            list.render(),
            "Shopping list:\nbutter - 10 g\negg - 2 pcs\n"
        );
    }

    #[tokio::test]
    async fn should_warn_and_skip_non_positive_amounts() {
        let recipe_id = Uuid::from_u128(1);
        let salt = Uuid::from_u128(20);
        let water = Uuid::from_u128(21);

        let mut recipes = MockRecipeRepo::new();
        recipes.expect_get_ingredient_lines().returning(move |_| {
            Ok(vec![
                ingredient_line(salt, "salt", "g", 0),
                ingredient_line(water, "water", "ml", 250),
            ])
        });

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("non-positive"))
            .times(1)
            .returning(|_| ());

        let use_case = GetShoppingListUseCaseImpl {
            cart: Arc::new(cart_with(vec![recipe_id])),
            recipes: Arc::new(recipes),
            logger: Arc::new(logger),
        };

        let list = use_case
            .execute(GetShoppingListParams {
                user_id: UserId::new("1"),
            })
            .await
            .unwrap();

        assert_eq!(list.lines.len(), 1);
        assert_eq!(list.lines[0].name, "water");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut cart = MockRecipeRelationRepo::new();
        cart.expect_list_targets()
            .returning(|_| Err(RepositoryError::database_error()));

        let use_case = GetShoppingListUseCaseImpl {
            cart: Arc::new(cart),
            recipes: Arc::new(MockRecipeRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShoppingListParams {
                user_id: UserId::new("1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
