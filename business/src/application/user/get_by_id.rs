use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserParams, GetUserUseCase};

pub struct GetUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub follows: Arc<dyn RelationRepository<UserId>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserUseCase for GetUserUseCaseImpl {
    async fn execute(&self, params: GetUserParams) -> Result<UserProfile, UserError> {
        self.logger.debug(&format!("Fetching user {}", params.id));

        let user = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        let is_subscribed = match &params.viewer {
            Some(viewer) => self.follows.exists(viewer, &user.id).await?,
            None => false,
        };

        Ok(UserProfile {
            user,
            is_subscribed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockFollowRepo, MockUserRepo, mock_logger, user};

    #[tokio::test]
    async fn should_mark_followed_author_as_subscribed() {
        let mut repository = MockUserRepo::new();
        repository
            .expect_get_by_id()
            .returning(|id| Ok(user(id.as_str())));
        let mut follows = MockFollowRepo::new();
        follows
            .expect_exists()
            .withf(|viewer, author| viewer.as_str() == "me" && author.as_str() == "chef")
            .returning(|_, _| Ok(true));

        let use_case = GetUserUseCaseImpl {
            repository: Arc::new(repository),
            follows: Arc::new(follows),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(GetUserParams {
                id: UserId::new("chef"),
                viewer: Some(UserId::new("me")),
            })
            .await
            .unwrap();

        assert!(profile.is_subscribed);
        assert_eq!(profile.user.username, "chef");
    }

    #[tokio::test]
    async fn should_not_check_follows_for_anonymous_viewer() {
        let mut repository = MockUserRepo::new();
        repository
            .expect_get_by_id()
            .returning(|id| Ok(user(id.as_str())));
        let mut follows = MockFollowRepo::new();
        follows.expect_exists().never();

        let use_case = GetUserUseCaseImpl {
            repository: Arc::new(repository),
            follows: Arc::new(follows),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(GetUserParams {
                id: UserId::new("chef"),
                viewer: None,
            })
            .await
            .unwrap();

        assert!(!profile.is_subscribed);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_user() {
        let mut repository = MockUserRepo::new();
        repository
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetUserUseCaseImpl {
            repository: Arc::new(repository),
            follows: Arc::new(MockFollowRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserParams {
                id: UserId::new("nobody"),
                viewer: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
