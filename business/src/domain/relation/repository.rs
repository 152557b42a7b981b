use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{RelationKind, RelationTarget};

/// Storage capability shared by the cart, favorites and follows.
///
/// Each `(user, target)` pair exists at most once; the store enforces this
/// with a uniqueness constraint and reports a losing concurrent insert as
/// `RepositoryError::Duplicated`.
#[async_trait]
pub trait RelationRepository<T: RelationTarget>: Send + Sync {
    fn kind(&self) -> RelationKind;
    async fn target_exists(&self, target: &T) -> Result<bool, RepositoryError>;
    async fn exists(&self, user_id: &UserId, target: &T) -> Result<bool, RepositoryError>;
    async fn insert(&self, user_id: &UserId, target: &T) -> Result<(), RepositoryError>;
    /// Returns whether a row was removed.
    async fn delete(&self, user_id: &UserId, target: &T) -> Result<bool, RepositoryError>;
    /// Removes every user's relation to `target`. Returns the number removed.
    async fn delete_for_target(&self, target: &T) -> Result<u64, RepositoryError>;
    /// Targets of the user, oldest relation first.
    async fn list_targets(&self, user_id: &UserId) -> Result<Vec<T>, RepositoryError>;
}
