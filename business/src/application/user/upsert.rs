use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::upsert::{UpsertProfileParams, UpsertProfileUseCase};

/// Creates or replaces the caller's own profile. Registration date is kept
/// across updates.
pub struct UpsertProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpsertProfileUseCase for UpsertProfileUseCaseImpl {
    async fn execute(&self, params: UpsertProfileParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Saving profile for user {}", params.user_id));

        let mut user = User::new(NewUserProps {
            id: params.user_id,
            email: params.email,
            username: params.username,
            first_name: params.first_name,
            last_name: params.last_name,
        })?;

        match self.repository.get_by_id(&user.id).await {
            Ok(existing) => user.created_at = existing.created_at,
            Err(RepositoryError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::AlreadyExists,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("Profile saved: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockUserRepo, mock_logger, user};
    use chrono::{Duration, Utc};

    fn params() -> UpsertProfileParams {
        UpsertProfileParams {
            user_id: UserId::new("chef"),
            email: "Chef@Example.com".to_string(),
            username: "chef".to_string(),
            first_name: "Julia".to_string(),
            last_name: "Child".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_new_profile() {
        let mut repository = MockUserRepo::new();
        repository
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repository.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpsertProfileUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let saved = use_case.execute(params()).await.unwrap();

        assert_eq!(saved.email, "chef@example.com");
        assert_eq!(saved.first_name, "Julia");
    }

    #[tokio::test]
    async fn should_keep_registration_date_on_update() {
        let registered = Utc::now() - Duration::days(30);
        let mut repository = MockUserRepo::new();
        repository.expect_get_by_id().returning(move |id| {
            let mut existing = user(id.as_str());
            existing.created_at = registered;
            Ok(existing)
        });
        repository
            .expect_save()
            .withf(move |u| u.created_at == registered)
            .returning(|_| Ok(()));

        let use_case = UpsertProfileUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let saved = use_case.execute(params()).await.unwrap();

        assert_eq!(saved.created_at, registered);
    }

    #[tokio::test]
    async fn should_report_taken_username() {
        let mut repository = MockUserRepo::new();
        repository
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repository
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = UpsertProfileUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), UserError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_invalid_email() {
        let mut repository = MockUserRepo::new();
        repository.expect_save().never();

        let use_case = UpsertProfileUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let mut bad = params();
        bad.email = "not-an-email".to_string();
        let result = use_case.execute(bad).await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidEmail));
    }
}
