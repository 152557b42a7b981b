use crate::domain::shared::value_objects::UserId;

/// Query-string filters as sent by a client.
#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    /// Tag slugs; a recipe matches when it carries any of them.
    pub tags: Vec<String>,
    pub author: Option<UserId>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// Storage-level filter with the viewer-dependent flags resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub tags: Vec<String>,
    pub author: Option<UserId>,
    pub favorited_by: Option<UserId>,
    pub in_cart_of: Option<UserId>,
}

impl RecipeQuery {
    /// Favorite and cart flags only apply to an authenticated viewer.
    pub fn into_filter(self, viewer: Option<&UserId>) -> RecipeFilter {
        let mut tags = self.tags;
        tags.retain(|t| !t.trim().is_empty());
        tags.sort();
        tags.dedup();

        RecipeFilter {
            tags,
            author: self.author,
            favorited_by: viewer.filter(|_| self.is_favorited).cloned(),
            in_cart_of: viewer.filter(|_| self.is_in_shopping_cart).cloned(),
        }
    }
}

/// Parses the boolean query flags: `1` and `true` (any case) mean true.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true")
    )
}
