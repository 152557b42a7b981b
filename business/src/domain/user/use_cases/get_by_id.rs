use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

pub struct GetUserParams {
    pub id: UserId,
    pub viewer: Option<UserId>,
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, params: GetUserParams) -> Result<UserProfile, UserError>;
}
