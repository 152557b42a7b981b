use async_trait::async_trait;

use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::Subscription;

pub const DEFAULT_RECIPES_LIMIT: u32 = 10;

pub struct GetSubscriptionsParams {
    pub user_id: UserId,
    pub page: PageRequest,
    /// Maximum recipes previewed per author.
    pub recipes_limit: Option<u32>,
}

#[async_trait]
pub trait GetSubscriptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetSubscriptionsParams,
    ) -> Result<Page<Subscription>, UserError>;
}

pub struct GetSubscriptionParams {
    pub author_id: UserId,
    pub recipes_limit: Option<u32>,
}

#[async_trait]
pub trait GetSubscriptionUseCase: Send + Sync {
    async fn execute(&self, params: GetSubscriptionParams) -> Result<Subscription, UserError>;
}
