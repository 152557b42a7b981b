use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::use_cases::get_all::GetTagsUseCase;

pub struct GetTagsUseCaseImpl {
    pub repository: Arc<dyn TagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTagsUseCase for GetTagsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Tag>, TagError> {
        self.logger.debug("Listing tags");
        Ok(self.repository.get_all().await?)
    }
}
