use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::relation::errors::RelationError;
use crate::domain::relation::model::RelationTarget;
use crate::domain::relation::repository::RelationRepository;
use crate::domain::relation::use_cases::add::{AddRelationUseCase, RelationParams};

/// Creates a cart entry, favorite or follow, rejecting duplicates.
pub struct AddRelationUseCaseImpl<T: RelationTarget> {
    pub repository: Arc<dyn RelationRepository<T>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl<T: RelationTarget> AddRelationUseCase<T> for AddRelationUseCaseImpl<T> {
    async fn execute(&self, params: RelationParams<T>) -> Result<(), RelationError> {
        let kind = self.repository.kind();
        self.logger.info(&format!(
            "Adding {} {} for user {}",
            kind, params.target, params.user_id
        ));

        if params.target.refers_to(&params.user_id) {
            return Err(RelationError::SelfReference);
        }

        if !self.repository.target_exists(&params.target).await? {
            return Err(RelationError::TargetNotFound);
        }

        if self
            .repository
            .exists(&params.user_id, &params.target)
            .await?
        {
            return Err(RelationError::AlreadyExists);
        }

        // A concurrent request may insert between the check and here.
        self.repository
            .insert(&params.user_id, &params.target)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => RelationError::AlreadyExists,
                RepositoryError::NotFound => RelationError::TargetNotFound,
                other => RelationError::Repository(other),
            })?;

        self.logger.info(&format!("{} {} added", kind, params.target));
        Ok(())
    }
}
