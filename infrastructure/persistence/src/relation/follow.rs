use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::relation::model::RelationKind;
use business::domain::relation::repository::RelationRepository;
use business::domain::shared::value_objects::UserId;

use crate::errors::map_sqlx_error;

/// Subscriptions: `user_id` follows `author_id`.
pub struct FollowRepositoryPostgres {
    pool: PgPool,
}

impl FollowRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationRepository<UserId> for FollowRepositoryPostgres {
    fn kind(&self) -> RelationKind {
        RelationKind::Follow
    }

    async fn target_exists(&self, target: &UserId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(target.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn exists(&self, user_id: &UserId, target: &UserId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(target.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn insert(&self, user_id: &UserId, target: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO follows (user_id, author_id, created_at) VALUES ($1, $2, NOW())")
            .bind(user_id.as_str())
            .bind(target.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, target: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id.as_str())
            .bind(target.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_target(&self, target: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM follows WHERE author_id = $1")
            .bind(target.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn list_targets(&self, user_id: &UserId) -> Result<Vec<UserId>, RepositoryError> {
        let authors = sqlx::query_scalar::<_, String>(
            "SELECT author_id FROM follows WHERE user_id = $1 ORDER BY created_at, author_id",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(authors.into_iter().map(UserId::new).collect())
    }
}
