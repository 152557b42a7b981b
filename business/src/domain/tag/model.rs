use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::TagError;

static COLOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("colour pattern"));
static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    /// Hex colour, `#RRGGBB`.
    pub color: String,
    pub slug: String,
}

pub struct NewTagProps {
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl Tag {
    pub fn new(props: NewTagProps) -> Result<Self, TagError> {
        if props.name.trim().is_empty() {
            return Err(TagError::NameEmpty);
        }
        if !COLOR_PATTERN.is_match(&props.color) {
            return Err(TagError::InvalidColor);
        }
        if !SLUG_PATTERN.is_match(&props.slug) {
            return Err(TagError::InvalidSlug);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            color: props.color.to_uppercase(),
            slug: props.slug,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, color: String, slug: String) -> Self {
        Self {
            id,
            name,
            color,
            slug,
        }
    }
}

/// Tags every fresh installation starts with.
pub fn default_tags() -> Vec<NewTagProps> {
    [
        ("Breakfast", "#90EE90", "breakfast"),
        ("Dinner", "#49B64E", "dinner"),
        ("Lunch", "#40E0D0", "lunch"),
        ("Supper", "#8775D2", "supper"),
        ("Snack", "#FFD700", "snack"),
    ]
    .into_iter()
    .map(|(name, color, slug)| NewTagProps {
        name: name.to_string(),
        color: color.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, color: &str, slug: &str) -> NewTagProps {
        NewTagProps {
            name: name.to_string(),
            color: color.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn should_create_tag_and_normalize_color() {
        let tag = Tag::new(props("Brunch", "#aabbcc", "brunch")).unwrap();

        assert_eq!(tag.color, "#AABBCC");
        assert_eq!(tag.slug, "brunch");
    }

    #[test]
    fn should_reject_malformed_color() {
        for color in ["aabbcc", "#abc", "#GGGGGG", "#aabbccdd"] {
            let result = Tag::new(props("Brunch", color, "brunch"));
            assert!(matches!(result.unwrap_err(), TagError::InvalidColor), "{color}");
        }
    }

    #[test]
    fn should_reject_slug_with_spaces() {
        let result = Tag::new(props("Late night", "#000000", "late night"));

        assert!(matches!(result.unwrap_err(), TagError::InvalidSlug));
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Tag::new(props(" ", "#000000", "empty"));

        assert!(matches!(result.unwrap_err(), TagError::NameEmpty));
    }

    #[test]
    fn should_provide_valid_default_tags() {
        let tags: Vec<Tag> = default_tags()
            .into_iter()
            .map(|p| Tag::new(p).unwrap())
            .collect();

        assert_eq!(tags.len(), 5);
        assert!(tags.iter().any(|t| t.slug == "breakfast"));
    }
}
