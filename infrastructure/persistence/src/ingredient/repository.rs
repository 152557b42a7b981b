use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;

use super::entity::IngredientEntity;
use crate::errors::map_sqlx_error;

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `ILIKE` pattern matching `query` anywhere, with wildcards escaped.
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients ORDER BY name, measurement_unit",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE name ILIKE $1 ORDER BY name",
        )
        .bind(contains_pattern(query))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let entities = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert_if_absent(&self, ingredient: &Ingredient) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO ingredients (id, name, measurement_unit)
            VALUES ($1, $2, $3)
            ON CONFLICT (name, measurement_unit) DO NOTHING"#,
        )
        .bind(ingredient.id)
        .bind(&ingredient.name)
        .bind(&ingredient.measurement_unit)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}
