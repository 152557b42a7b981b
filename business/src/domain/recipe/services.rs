use async_trait::async_trait;

use super::errors::RecipeError;
use super::image::RecipeImage;

/// Service port for persisting recipe images outside the database.
///
/// Images are content-addressed, so storing the same image twice is a no-op
/// and files are never removed while another recipe may point at them.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn store(&self, image: &RecipeImage) -> Result<(), RecipeError>;
}
