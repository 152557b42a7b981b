use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{IngredientAmount, RecipeIngredient};
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;

/// Turns `(ingredient_id, amount)` pairs into full lines, keeping the
/// author's order. Any unknown id fails the whole request.
pub async fn resolve_ingredients(
    repository: &dyn IngredientRepository,
    items: &[IngredientAmount],
) -> Result<Vec<RecipeIngredient>, RecipeError> {
    let ids: Vec<Uuid> = items.iter().map(|i| i.ingredient_id).collect();
    let known: HashMap<Uuid, _> = repository
        .get_by_ids(&ids)
        .await?
        .into_iter()
        .map(|ingredient| (ingredient.id, ingredient))
        .collect();

    items
        .iter()
        .map(|item| {
            let ingredient = known
                .get(&item.ingredient_id)
                .ok_or(RecipeError::IngredientNotFound)?;
            Ok(RecipeIngredient {
                ingredient_id: ingredient.id,
                name: ingredient.name.clone(),
                measurement_unit: ingredient.measurement_unit.clone(),
                amount: item.amount,
            })
        })
        .collect()
}

pub async fn resolve_tags(
    repository: &dyn TagRepository,
    ids: &[Uuid],
) -> Result<Vec<Tag>, RecipeError> {
    let mut known: HashMap<Uuid, Tag> = repository
        .get_by_ids(ids)
        .await?
        .into_iter()
        .map(|tag| (tag.id, tag))
        .collect();

    ids.iter()
        .map(|id| known.remove(id).ok_or(RecipeError::TagNotFound))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::Ingredient;
    use crate::test_support::{MockIngredientRepo, MockTagRepo, tag};

    #[tokio::test]
    async fn should_keep_requested_order() {
        let flour = Ingredient::from_repository(Uuid::from_u128(1), "flour".into(), "g".into());
        let egg = Ingredient::from_repository(Uuid::from_u128(2), "egg".into(), "pcs".into());
        let mut repo = MockIngredientRepo::new();
        let stored = vec![flour.clone(), egg.clone()];
        repo.expect_get_by_ids()
            .returning(move |_| Ok(stored.clone()));

        let lines = resolve_ingredients(
            &repo,
            &[
                IngredientAmount {
                    ingredient_id: egg.id,
                    amount: 2,
                },
                IngredientAmount {
                    ingredient_id: flour.id,
                    amount: 150,
                },
            ],
        )
        .await
        .unwrap();

        assert_eq!(lines[0].name, "egg");
        assert_eq!(lines[0].amount, 2);
        assert_eq!(lines[1].name, "flour");
        assert_eq!(lines[1].measurement_unit, "g");
    }

    #[tokio::test]
    async fn should_fail_on_unknown_ingredient() {
        let mut repo = MockIngredientRepo::new();
        repo.expect_get_by_ids().returning(|_| Ok(vec![]));

        let result = resolve_ingredients(
            &repo,
            &[IngredientAmount {
                ingredient_id: Uuid::new_v4(),
                amount: 1,
            }],
        )
        .await;

        assert!(matches!(result.unwrap_err(), RecipeError::IngredientNotFound));
    }

    #[tokio::test]
    async fn should_fail_on_unknown_tag() {
        let lunch = tag("lunch");
        let lunch_id = lunch.id;
        let mut repo = MockTagRepo::new();
        repo.expect_get_by_ids()
            .returning(move |_| Ok(vec![lunch.clone()]));

        let result = resolve_tags(&repo, &[lunch_id, Uuid::new_v4()]).await;

        assert!(matches!(result.unwrap_err(), RecipeError::TagNotFound));
    }
}
