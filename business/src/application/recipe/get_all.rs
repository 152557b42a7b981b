use std::sync::Arc;

use async_trait::async_trait;

use super::details::RecipeDetailsAssembler;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_all::{GetRecipesParams, GetRecipesUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub details: Arc<RecipeDetailsAssembler>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipesUseCase for GetRecipesUseCaseImpl {
    async fn execute(&self, params: GetRecipesParams) -> Result<Page<RecipeDetails>, RecipeError> {
        let filter = params.query.into_filter(params.viewer.as_ref());
        self.logger.debug(&format!(
            "Listing recipes page {} with filter {:?}",
            params.page.page(),
            filter
        ));

        let page = self.repository.get_page(&filter, &params.page).await?;
        let details = self
            .details
            .assemble(page.items, params.viewer.as_ref())
            .await?;

        Ok(Page::new(details, page.count, page.request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::recipe::details::tests::assembler_for;
    use crate::domain::recipe::filter::{RecipeFilter, RecipeQuery};
    use crate::domain::shared::pagination::PageRequest;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockRecipeRepo, mock_logger, recipe};

    #[tokio::test]
    async fn should_return_page_with_total_count() {
        let mut repository = MockRecipeRepo::new();
        repository
            .expect_get_page()
            .withf(|filter, page| *filter == RecipeFilter::default() && page.page() == 2)
            .returning(|_, page| {
                Ok(Page::new(
                    vec![recipe("chef", "Soup")],
                    7,
                    *page,
                ))
            });

        let use_case = GetRecipesUseCaseImpl {
            repository: Arc::new(repository),
            details: Arc::new(assembler_for(&["chef"])),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetRecipesParams {
                query: RecipeQuery::default(),
                viewer: None,
                page: PageRequest::new(Some(2), Some(6)),
            })
            .await
            .unwrap();

        assert_eq!(page.count, 7);
        assert_eq!(page.items.len(), 1);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn should_scope_favorites_filter_to_viewer() {
        let mut repository = MockRecipeRepo::new();
        repository
            .expect_get_page()
            .withf(|filter, _| filter.favorited_by == Some(UserId::new("viewer")))
            .times(1)
            .returning(|_, page| Ok(Page::new(vec![], 0, *page)));

        let use_case = GetRecipesUseCaseImpl {
            repository: Arc::new(repository),
            details: Arc::new(assembler_for(&[])),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetRecipesParams {
                query: RecipeQuery {
                    is_favorited: true,
                    ..Default::default()
                },
                viewer: Some(UserId::new("viewer")),
                page: PageRequest::new(None, None),
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
    }
}
