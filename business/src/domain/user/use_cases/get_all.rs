use async_trait::async_trait;

use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

pub struct GetUsersParams {
    pub viewer: Option<UserId>,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self, params: GetUsersParams) -> Result<Page<UserProfile>, UserError>;
}
