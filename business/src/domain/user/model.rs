use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::UserError;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::shared::value_objects::UserId;

const MAX_NAME_LENGTH: usize = 150;
const MAX_EMAIL_LENGTH: usize = 254;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.@+-]+$").expect("username pattern"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// Public author profile. The id is the identity provider's subject.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let email = props.email.trim().to_lowercase();
        if email.len() > MAX_EMAIL_LENGTH || !EMAIL_PATTERN.is_match(&email) {
            return Err(UserError::InvalidEmail);
        }
        if props.username.len() > MAX_NAME_LENGTH || !USERNAME_PATTERN.is_match(&props.username) {
            return Err(UserError::InvalidUsername);
        }
        let first_name = props.first_name.trim().to_string();
        if first_name.is_empty() || first_name.chars().count() > MAX_NAME_LENGTH {
            return Err(UserError::FirstNameEmpty);
        }
        let last_name = props.last_name.trim().to_string();
        if last_name.is_empty() || last_name.chars().count() > MAX_NAME_LENGTH {
            return Err(UserError::LastNameEmpty);
        }

        Ok(Self {
            id: props.id,
            email,
            username: props.username,
            first_name,
            last_name,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        email: String,
        username: String,
        first_name: String,
        last_name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            username,
            first_name,
            last_name,
            created_at,
        }
    }
}

/// A user as seen by a viewer.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub is_subscribed: bool,
}

/// An author the user follows, with a preview of their recipes.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub author: User,
    pub recipes: Vec<RecipeSummary>,
    pub recipes_count: u64,
}
