use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::search::rank_by_name;
use crate::domain::ingredient::use_cases::get_all::{GetIngredientsParams, GetIngredientsUseCase};
use crate::domain::logger::Logger;

pub struct GetIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientsUseCase for GetIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError> {
        match params.name.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                self.logger
                    .debug(&format!("Searching ingredients by '{}'", query));
                let found = self.repository.search_by_name(query).await?;
                Ok(rank_by_name(query, found))
            }
            _ => Ok(self.repository.get_all().await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockIngredientRepo, mock_logger};
    use uuid::Uuid;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient::from_repository(Uuid::new_v4(), name.to_string(), "g".to_string())
    }

    #[tokio::test]
    async fn should_list_all_without_filter() {
        let mut repository = MockIngredientRepo::new();
        repository
            .expect_get_all()
            .returning(|| Ok(vec![ingredient("flour"), ingredient("sugar")]));
        repository.expect_search_by_name().never();

        let use_case = GetIngredientsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let all = use_case
            .execute(GetIngredientsParams { name: Some("  ".to_string()) })
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_put_prefix_matches_first() {
        let mut repository = MockIngredientRepo::new();
        repository
            .expect_search_by_name()
            .withf(|query| query == "sugar")
            .returning(|_| Ok(vec![ingredient("brown sugar"), ingredient("sugar")]));

        let use_case = GetIngredientsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetIngredientsParams {
                name: Some("sugar".to_string()),
            })
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["sugar", "brown sugar"]);
    }
}
