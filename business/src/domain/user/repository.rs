use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
    /// Users ordered by registration date.
    async fn get_page(&self, page: &PageRequest) -> Result<Page<User>, RepositoryError>;
    /// Inserts or updates the profile. Email/username clashes yield `Duplicated`.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
