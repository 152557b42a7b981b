use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::{GetUsersParams, GetUsersUseCase};

pub struct GetUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub follows: Arc<dyn RelationRepository<UserId>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUsersUseCase for GetUsersUseCaseImpl {
    async fn execute(&self, params: GetUsersParams) -> Result<Page<UserProfile>, UserError> {
        self.logger
            .debug(&format!("Listing users page {}", params.page.page()));

        let page = self.repository.get_page(&params.page).await?;
        let followed: HashSet<UserId> = match &params.viewer {
            Some(viewer) => self.follows.list_targets(viewer).await?.into_iter().collect(),
            None => HashSet::new(),
        };

        Ok(page.map(|user| UserProfile {
            is_subscribed: followed.contains(&user.id),
            user,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::pagination::PageRequest;
    use crate::test_support::{MockFollowRepo, MockUserRepo, mock_logger, user};

    #[tokio::test]
    async fn should_flag_followed_users() {
        let mut repository = MockUserRepo::new();
        repository.expect_get_page().returning(|page| {
            Ok(Page::new(vec![user("chef"), user("baker")], 2, *page))
        });
        let mut follows = MockFollowRepo::new();
        follows
            .expect_list_targets()
            .returning(|_| Ok(vec![UserId::new("baker")]));

        let use_case = GetUsersUseCaseImpl {
            repository: Arc::new(repository),
            follows: Arc::new(follows),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetUsersParams {
                viewer: Some(UserId::new("me")),
                page: PageRequest::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.count, 2);
        assert!(!page.items[0].is_subscribed);
        assert!(page.items[1].is_subscribed);
    }
}
