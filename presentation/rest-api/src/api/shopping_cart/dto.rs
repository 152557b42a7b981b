use poem_openapi::Object;
use uuid::Uuid;

use business::domain::shopping_list::model::{AggregatedLine, ShoppingList};

#[derive(Debug, Clone, Object)]
pub struct ShoppingListLineResponse {
    /// Ingredient id
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    /// Sum of the amounts across every recipe in the cart
    pub total_amount: i64,
}

impl From<AggregatedLine> for ShoppingListLineResponse {
    fn from(line: AggregatedLine) -> Self {
        Self {
            id: line.ingredient_id,
            name: line.name,
            measurement_unit: line.measurement_unit,
            total_amount: line.total_amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    pub lines: Vec<ShoppingListLineResponse>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            lines: list.lines.into_iter().map(Into::into).collect(),
        }
    }
}
