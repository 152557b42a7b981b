use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct GetShoppingListParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: GetShoppingListParams)
    -> Result<ShoppingList, ShoppingListError>;
}
