use poem_openapi::Object;

use business::domain::shared::pagination::Page;
use business::domain::user::model::{Subscription, User, UserProfile};

use crate::api::links::Links;
use crate::api::recipe::dto::RecipeSummaryResponse;

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the viewer follows this user. Always false for anonymous viewers.
    pub is_subscribed: bool,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            is_subscribed: profile.is_subscribed,
            ..Self::from(profile.user)
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed: false,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpsertProfileRequest {
    pub email: String,
    /// Letters, digits and `@ . + - _`
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserPageResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<UserResponse>,
}

impl UserPageResponse {
    pub fn new(page: Page<UserProfile>, next: Option<String>, previous: Option<String>) -> Self {
        Self {
            count: page.count,
            next,
            previous,
            results: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A followed author with a preview of their newest recipes.
#[derive(Debug, Clone, Object)]
pub struct SubscriptionResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeSummaryResponse>,
    pub recipes_count: u64,
}

impl SubscriptionResponse {
    pub fn new(subscription: Subscription, links: &Links) -> Self {
        let author = subscription.author;
        Self {
            id: author.id.to_string(),
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: true,
            recipes: subscription
                .recipes
                .into_iter()
                .map(|summary| RecipeSummaryResponse::new(summary, links))
                .collect(),
            recipes_count: subscription.recipes_count,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubscriptionPageResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<SubscriptionResponse>,
}
