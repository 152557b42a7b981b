use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::import::{
    ImportIngredientsParams, ImportIngredientsUseCase,
};
use crate::domain::logger::Logger;

/// Bulk load of the ingredient catalogue. Already known `(name, unit)`
/// pairs are left untouched, so the import can be re-run.
pub struct ImportIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ImportIngredientsUseCase for ImportIngredientsUseCaseImpl {
    async fn execute(&self, params: ImportIngredientsParams) -> Result<u64, IngredientError> {
        self.logger
            .info(&format!("Importing {} ingredients", params.items.len()));

        let mut inserted = 0;
        for item in params.items {
            let ingredient = match Ingredient::new(item.name, item.measurement_unit) {
                Ok(ingredient) => ingredient,
                Err(e) => {
                    self.logger
                        .warn(&format!("Skipping invalid ingredient: {}", e));
                    continue;
                }
            };
            if self.repository.insert_if_absent(&ingredient).await? {
                inserted += 1;
            }
        }

        self.logger
            .info(&format!("Ingredient import done: {} inserted", inserted));
        Ok(inserted)
    }
}
