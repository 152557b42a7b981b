use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::tag::model::Tag;
use business::domain::tag::repository::TagRepository;

use super::entity::TagEntity;
use crate::errors::map_sqlx_error;

pub struct TagRepositoryPostgres {
    pool: PgPool,
}

impl TagRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, TagEntity>("SELECT id, name, color, slug FROM tags ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError> {
        let entity =
            sqlx::query_as::<_, TagEntity>("SELECT id, name, color, slug FROM tags WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let entities = sqlx::query_as::<_, TagEntity>(
            "SELECT id, name, color, slug FROM tags WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert_if_absent(&self, tag: &Tag) -> Result<bool, RepositoryError> {
        // Name, colour and slug are each unique; a clash on any of them skips the row.
        let result = sqlx::query(
            r#"INSERT INTO tags (id, name, color, slug)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING"#,
        )
        .bind(tag.id)
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(&tag.slug)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}
