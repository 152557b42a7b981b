use std::collections::HashMap;

use uuid::Uuid;

use super::model::AggregatedLine;
use crate::domain::recipe::model::RecipeIngredient;

/// Result of folding a cart's ingredient lines.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// One entry per `(ingredient_id, measurement_unit)`, ordered by name.
    pub lines: Vec<AggregatedLine>,
    /// Lines with a non-positive amount, left out of the totals.
    pub skipped: Vec<RecipeIngredient>,
}

/// Groups lines by ingredient identity and unit, sums their amounts and
/// orders the groups by name (byte order), then unit, then ingredient id.
pub fn aggregate_lines<I>(lines: I) -> Aggregation
where
    I: IntoIterator<Item = RecipeIngredient>,
{
    let mut groups: HashMap<(Uuid, String), AggregatedLine> = HashMap::new();
    let mut skipped = Vec::new();

    for line in lines {
        if line.amount <= 0 {
            skipped.push(line);
            continue;
        }
        let amount = i64::from(line.amount);
        groups
            .entry((line.ingredient_id, line.measurement_unit.clone()))
            .and_modify(|group| group.total_amount += amount)
            .or_insert_with(|| AggregatedLine {
                ingredient_id: line.ingredient_id,
                name: line.name,
                measurement_unit: line.measurement_unit,
                total_amount: amount,
            });
    }

    let mut lines: Vec<AggregatedLine> = groups.into_values().collect();
    lines.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
            .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
    });

    Aggregation { lines, skipped }
}
