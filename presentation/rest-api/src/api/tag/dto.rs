use poem_openapi::Object;
use uuid::Uuid;

use business::domain::tag::model::Tag;

#[derive(Debug, Clone, Object)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    /// Hex colour, `#RRGGBB`
    pub color: String,
    pub slug: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            color: tag.color,
            slug: tag.slug,
        }
    }
}
