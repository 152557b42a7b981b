use async_trait::async_trait;

use crate::domain::relation::errors::RelationError;
use crate::domain::relation::model::RelationTarget;

use super::add::RelationParams;

#[async_trait]
pub trait RemoveRelationUseCase<T: RelationTarget>: Send + Sync {
    async fn execute(&self, params: RelationParams<T>) -> Result<(), RelationError>;
}
