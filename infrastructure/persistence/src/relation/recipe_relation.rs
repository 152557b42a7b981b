use async_trait::async_trait;
use sqlx::PgPool;
use strum_macros::{AsRefStr, EnumIter};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::relation::model::RelationKind;
use business::domain::relation::repository::RelationRepository;
use business::domain::shared::value_objects::UserId;

use crate::errors::map_sqlx_error;

/// Tables holding `(user_id, recipe_id)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RecipeRelationTable {
    Favorites,
    ShoppingCart,
}

impl RecipeRelationTable {
    pub fn kind(self) -> RelationKind {
        match self {
            RecipeRelationTable::Favorites => RelationKind::Favorite,
            RecipeRelationTable::ShoppingCart => RelationKind::ShoppingCart,
        }
    }
}

/// Favorites and shopping cart share one layout; the table is fixed at
/// construction.
pub struct RecipeRelationRepositoryPostgres {
    pool: PgPool,
    table: RecipeRelationTable,
}

impl RecipeRelationRepositoryPostgres {
    pub fn favorites(pool: PgPool) -> Self {
        Self {
            pool,
            table: RecipeRelationTable::Favorites,
        }
    }

    pub fn shopping_cart(pool: PgPool) -> Self {
        Self {
            pool,
            table: RecipeRelationTable::ShoppingCart,
        }
    }
}

#[async_trait]
impl RelationRepository<Uuid> for RecipeRelationRepositoryPostgres {
    fn kind(&self) -> RelationKind {
        self.table.kind()
    }

    async fn target_exists(&self, target: &Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM recipes WHERE id = $1)")
            .bind(target)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn exists(&self, user_id: &UserId, target: &Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(&format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE user_id = $1 AND recipe_id = $2)",
            self.table.as_ref()
        ))
        .bind(user_id.as_str())
        .bind(target)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn insert(&self, user_id: &UserId, target: &Uuid) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "INSERT INTO {} (user_id, recipe_id, created_at) VALUES ($1, $2, NOW())",
            self.table.as_ref()
        ))
        .bind(user_id.as_str())
        .bind(target)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, target: &Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE user_id = $1 AND recipe_id = $2",
            self.table.as_ref()
        ))
        .bind(user_id.as_str())
        .bind(target)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_target(&self, target: &Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE recipe_id = $1",
            self.table.as_ref()
        ))
        .bind(target)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn list_targets(&self, user_id: &UserId) -> Result<Vec<Uuid>, RepositoryError> {
        sqlx::query_scalar::<_, Uuid>(&format!(
            "SELECT recipe_id FROM {} WHERE user_id = $1 ORDER BY created_at, recipe_id",
            self.table.as_ref()
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_name_tables_after_migrations() {
        let tables: Vec<RecipeRelationTable> = RecipeRelationTable::iter().collect();
        let names: Vec<&str> = tables.iter().map(|t| t.as_ref()).collect();
        assert_eq!(names, vec!["favorites", "shopping_cart"]);
    }

    #[test]
    fn should_map_tables_to_relation_kinds() {
        assert_eq!(RecipeRelationTable::Favorites.kind(), RelationKind::Favorite);
        assert_eq!(
            RecipeRelationTable::ShoppingCart.kind(),
            RelationKind::ShoppingCart
        );
    }
}
