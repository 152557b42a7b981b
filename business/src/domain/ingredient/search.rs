use super::model::Ingredient;

/// Orders name matches so that ingredients starting with `query` come
/// before those only containing it. Matching is case-insensitive and each
/// group is sorted by name. Entries that match neither way are dropped.
pub fn rank_by_name(query: &str, ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return ingredients;
    }

    let (mut prefixed, mut contained): (Vec<_>, Vec<_>) = ingredients
        .into_iter()
        .filter(|i| i.name.to_lowercase().contains(&needle))
        .partition(|i| i.name.to_lowercase().starts_with(&needle));

    prefixed.sort_by(|a, b| a.name.cmp(&b.name));
    contained.sort_by(|a, b| a.name.cmp(&b.name));
    prefixed.extend(contained);
    prefixed
}
