use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::use_cases::seed::{SeedTagsParams, SeedTagsUseCase};

pub struct SeedTagsUseCaseImpl {
    pub repository: Arc<dyn TagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedTagsUseCase for SeedTagsUseCaseImpl {
    async fn execute(&self, params: SeedTagsParams) -> Result<u64, TagError> {
        // Validate everything first so a bad entry leaves the table untouched.
        let tags = params
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;

        let mut inserted = 0;
        for tag in &tags {
            if self.repository.insert_if_absent(tag).await? {
                inserted += 1;
            }
        }

        self.logger.info(&format!(
            "Tag seed done: {} of {} inserted",
            inserted,
            tags.len()
        ));
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::model::{NewTagProps, default_tags};
    use crate::test_support::{MockTagRepo, mock_logger};

    #[tokio::test]
    async fn should_insert_default_tags_once() {
        let mut repository = MockTagRepo::new();
        repository
            .expect_insert_if_absent()
            .times(5)
            .returning(|tag| Ok(tag.slug != "lunch"));

        let use_case = SeedTagsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let inserted = use_case
            .execute(SeedTagsParams {
                tags: default_tags(),
            })
            .await
            .unwrap();

        assert_eq!(inserted, 4);
    }

    #[tokio::test]
    async fn should_reject_batch_with_invalid_colour() {
        let mut repository = MockTagRepo::new();
        repository.expect_insert_if_absent().never();

        let use_case = SeedTagsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SeedTagsParams {
                tags: vec![NewTagProps {
                    name: "Brunch".to_string(),
                    color: "orange".to_string(),
                    slug: "brunch".to_string(),
                }],
            })
            .await;

        assert!(matches!(result.unwrap_err(), TagError::InvalidColor));
    }
}
