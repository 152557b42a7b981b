use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Tag;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError>;
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepositoryError>;
    /// Inserts unless a tag with the same slug exists. Returns whether a row was written.
    async fn insert_if_absent(&self, tag: &Tag) -> Result<bool, RepositoryError>;
}
