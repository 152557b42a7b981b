use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// The user-owned relations that share the exists / add / remove rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Favorite,
    ShoppingCart,
    Follow,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::Favorite => write!(f, "favorite"),
            RelationKind::ShoppingCart => write!(f, "shopping_cart"),
            RelationKind::Follow => write!(f, "follow"),
        }
    }
}

/// Something a user can point a relation at: a recipe or another user.
pub trait RelationTarget: Clone + Send + Sync + std::fmt::Display + 'static {
    /// Whether the target is the acting user themself.
    fn refers_to(&self, _user_id: &UserId) -> bool {
        false
    }
}

impl RelationTarget for Uuid {}

impl RelationTarget for UserId {
    fn refers_to(&self, user_id: &UserId) -> bool {
        self == user_id
    }
}
