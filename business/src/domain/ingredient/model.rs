use uuid::Uuid;

use super::errors::IngredientError;

/// Canonical ingredient record. Immutable reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    pub fn new(name: String, measurement_unit: String) -> Result<Self, IngredientError> {
        let name = name.trim().to_string();
        let measurement_unit = measurement_unit.trim().to_string();
        if name.is_empty() {
            return Err(IngredientError::NameEmpty);
        }
        if measurement_unit.is_empty() {
            return Err(IngredientError::MeasurementUnitEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            measurement_unit,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, measurement_unit: String) -> Self {
        Self {
            id,
            name,
            measurement_unit,
        }
    }
}
