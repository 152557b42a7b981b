use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::Subscription;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::subscriptions::{
    DEFAULT_RECIPES_LIMIT, GetSubscriptionParams, GetSubscriptionUseCase,
    GetSubscriptionsParams, GetSubscriptionsUseCase,
};

/// Loads one author with a preview of their newest recipes.
pub struct GetSubscriptionUseCaseImpl {
    pub users: Arc<dyn UserRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetSubscriptionUseCaseImpl {
    async fn load(&self, author_id: &UserId, recipes_limit: u32) -> Result<Subscription, UserError> {
        let author = self
            .users
            .get_by_id(author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;
        let recipes = self
            .recipes
            .get_by_author(author_id, recipes_limit)
            .await?
            .iter()
            .map(|r| r.summary())
            .collect();
        let recipes_count = self.recipes.count_by_author(author_id).await?;

        Ok(Subscription {
            author,
            recipes,
            recipes_count,
        })
    }
}

#[async_trait]
impl GetSubscriptionUseCase for GetSubscriptionUseCaseImpl {
    async fn execute(&self, params: GetSubscriptionParams) -> Result<Subscription, UserError> {
        self.logger
            .debug(&format!("Loading subscription preview of {}", params.author_id));
        self.load(
            &params.author_id,
            params.recipes_limit.unwrap_or(DEFAULT_RECIPES_LIMIT),
        )
        .await
    }
}

pub struct GetSubscriptionsUseCaseImpl {
    pub follows: Arc<dyn RelationRepository<UserId>>,
    pub subscription: Arc<GetSubscriptionUseCaseImpl>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSubscriptionsUseCase for GetSubscriptionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetSubscriptionsParams,
    ) -> Result<Page<Subscription>, UserError> {
        self.logger.debug(&format!(
            "Listing subscriptions of {} page {}",
            params.user_id,
            params.page.page()
        ));

        let authors = self.follows.list_targets(&params.user_id).await?;
        let page = Page::from_vec(authors, params.page);
        let limit = params.recipes_limit.unwrap_or(DEFAULT_RECIPES_LIMIT);

        let mut subscriptions = Vec::with_capacity(page.items.len());
        for author_id in &page.items {
            subscriptions.push(self.subscription.load(author_id, limit).await?);
        }

        Ok(Page::new(subscriptions, page.count, page.request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::pagination::PageRequest;
    use crate::test_support::{MockFollowRepo, MockRecipeRepo, MockUserRepo, mock_logger, recipe, user};

    fn subscription_loader() -> GetSubscriptionUseCaseImpl {
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .returning(|id| Ok(user(id.as_str())));
        let mut recipes = MockRecipeRepo::new();
        recipes.expect_get_by_author().returning(|author, limit| {
            Ok((0..limit.min(3))
                .map(|i| recipe(author.as_str(), &format!("Dish {i}")))
                .collect())
        });
        recipes.expect_count_by_author().returning(|_| Ok(3));
        GetSubscriptionUseCaseImpl {
            users: Arc::new(users),
            recipes: Arc::new(recipes),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_limit_recipe_preview() {
        let use_case = subscription_loader();

        let subscription = use_case
            .execute(GetSubscriptionParams {
                author_id: UserId::new("chef"),
                recipes_limit: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(subscription.author.username, "chef");
        assert_eq!(subscription.recipes.len(), 2);
        assert_eq!(subscription.recipes_count, 3);
    }

    #[tokio::test]
    async fn should_page_followed_authors() {
        let mut follows = MockFollowRepo::new();
        follows.expect_list_targets().returning(|_| {
            Ok(vec![
                UserId::new("a"),
                UserId::new("b"),
                UserId::new("c"),
            ])
        });

        let use_case = GetSubscriptionsUseCaseImpl {
            follows: Arc::new(follows),
            subscription: Arc::new(subscription_loader()),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetSubscriptionsParams {
                user_id: UserId::new("me"),
                page: PageRequest::new(Some(2), Some(2)),
                recipes_limit: None,
            })
            .await
            .unwrap();

        assert_eq!(page.count, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].author.id, UserId::new("c"));
        assert_eq!(page.items[0].recipes.len(), 3);
    }
}
