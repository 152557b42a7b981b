use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::pagination::{Page, PageRequest};
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::errors::map_sqlx_error;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, email, username, first_name, last_name, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_page(&self, page: &PageRequest) -> Result<Page<User>, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let entities = sqlx::query_as::<_, UserEntity>(
            r#"SELECT id, email, username, first_name, last_name, created_at
            FROM users
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2"#,
        )
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            count.max(0) as u64,
            *page,
        ))
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, email, username, first_name, last_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                username = EXCLUDED.username,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name"#,
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
