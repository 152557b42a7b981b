use async_trait::async_trait;

use crate::domain::relation::errors::RelationError;
use crate::domain::relation::model::RelationTarget;
use crate::domain::shared::value_objects::UserId;

pub struct RelationParams<T> {
    pub user_id: UserId,
    pub target: T,
}

#[async_trait]
pub trait AddRelationUseCase<T: RelationTarget>: Send + Sync {
    async fn execute(&self, params: RelationParams<T>) -> Result<(), RelationError>;
}
