use async_trait::async_trait;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::NewTagProps;

pub struct SeedTagsParams {
    pub tags: Vec<NewTagProps>,
}

#[async_trait]
pub trait SeedTagsUseCase: Send + Sync {
    /// Returns the number of tags actually inserted.
    async fn execute(&self, params: SeedTagsParams) -> Result<u64, TagError>;
}
