use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::relation::errors::RelationError;
use crate::domain::relation::model::RelationTarget;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::relation::use_cases::add::RelationParams;
use crate::domain::relation::use_cases::remove::RemoveRelationUseCase;

pub struct RemoveRelationUseCaseImpl<T: RelationTarget> {
    pub repository: Arc<dyn RelationRepository<T>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl<T: RelationTarget> RemoveRelationUseCase<T> for RemoveRelationUseCaseImpl<T> {
    async fn execute(&self, params: RelationParams<T>) -> Result<(), RelationError> {
        let kind = self.repository.kind();
        self.logger.info(&format!(
            "Removing {} {} for user {}",
            kind, params.target, params.user_id
        ));

        let removed = self
            .repository
            .delete(&params.user_id, &params.target)
            .await?;
        if !removed {
            return Err(RelationError::NotFound);
        }

        self.logger
            .info(&format!("{} {} removed", kind, params.target));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::relation::model::RelationKind;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockRecipeRelationRepo, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_remove_existing_entry() {
        let mut repo = MockRecipeRelationRepo::new();
        repo.expect_kind().return_const(RelationKind::Favorite);
        repo.expect_delete().times(1).returning(|_, _| Ok(true));

        let use_case = RemoveRelationUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RelationParams {
                user_id: UserId::new("1"),
                target: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_entry_missing() {
        let mut repo = MockRecipeRelationRepo::new();
        repo.expect_kind().return_const(RelationKind::ShoppingCart);
        repo.expect_delete().returning(|_, _| Ok(false));

        let use_case = RemoveRelationUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RelationParams {
                user_id: UserId::new("1"),
                target: Uuid::from_u128(9),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RelationError::NotFound));
    }
}
