use poem_openapi::Object;
use uuid::Uuid;

use business::domain::ingredient::model::Ingredient;

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}
