use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::filter::RecipeFilter;
use business::domain::recipe::model::{Recipe, RecipeIngredient};
use business::domain::recipe::repository::RecipeRepository;
use business::domain::shared::pagination::{Page, PageRequest};
use business::domain::shared::value_objects::UserId;
use business::domain::tag::model::Tag;

use super::entity::{RecipeEntity, RecipeIngredientRow, RecipeTagRow};
use crate::errors::map_sqlx_error;

const RECIPE_COLUMNS: &str =
    "r.id, r.author_id, r.name, r.image, r.text, r.cooking_time, r.created_at, r.updated_at";

const LINES_QUERY: &str = r#"SELECT ri.recipe_id, ri.ingredient_id, i.name, i.measurement_unit, ri.amount
    FROM recipe_ingredients ri
    JOIN ingredients i ON i.id = ri.ingredient_id
    WHERE ri.recipe_id = ANY($1)
    ORDER BY ri.recipe_id, ri.position"#;

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads ingredient lines and tags for a batch of recipe rows.
    async fn hydrate(&self, entities: Vec<RecipeEntity>) -> Result<Vec<Recipe>, RepositoryError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();

        let mut lines: HashMap<Uuid, Vec<RecipeIngredient>> = HashMap::new();
        for row in sqlx::query_as::<_, RecipeIngredientRow>(LINES_QUERY)
            .bind(ids.as_slice())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?
        {
            lines.entry(row.recipe_id).or_default().push(row.into_domain());
        }

        let mut tags: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in sqlx::query_as::<_, RecipeTagRow>(
            r#"SELECT rt.recipe_id, t.id, t.name, t.color, t.slug
            FROM recipe_tags rt
            JOIN tags t ON t.id = rt.tag_id
            WHERE rt.recipe_id = ANY($1)
            ORDER BY t.name"#,
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        {
            tags.entry(row.recipe_id).or_default().push(row.into_domain());
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let recipe_lines = lines.remove(&entity.id).unwrap_or_default();
                let recipe_tags = tags.remove(&entity.id).unwrap_or_default();
                entity.into_domain(recipe_lines, recipe_tags)
            })
            .collect())
    }
}

/// Appends the `WHERE` clause for `filter` to a query over `recipes r`.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &RecipeFilter) {
    builder.push(" WHERE TRUE");
    if !filter.tags.is_empty() {
        builder
            .push(
                " AND EXISTS (SELECT 1 FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id \
                 WHERE rt.recipe_id = r.id AND t.slug = ANY(",
            )
            .push_bind(filter.tags.clone())
            .push("))");
    }
    if let Some(author) = &filter.author {
        builder
            .push(" AND r.author_id = ")
            .push_bind(author.as_str().to_string());
    }
    if let Some(user) = &filter.favorited_by {
        builder
            .push(" AND EXISTS (SELECT 1 FROM favorites f WHERE f.recipe_id = r.id AND f.user_id = ")
            .push_bind(user.as_str().to_string())
            .push(")");
    }
    if let Some(user) = &filter.in_cart_of {
        builder
            .push(
                " AND EXISTS (SELECT 1 FROM shopping_cart sc WHERE sc.recipe_id = r.id AND sc.user_id = ",
            )
            .push_bind(user.as_str().to_string())
            .push(")");
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_page(
        &self,
        filter: &RecipeFilter,
        page: &PageRequest,
    ) -> Result<Page<Recipe>, RepositoryError> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM recipes r");
        push_filter(&mut count_query, filter);
        let count: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut page_query =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM recipes r", RECIPE_COLUMNS));
        push_filter(&mut page_query, filter);
        page_query
            .push(" ORDER BY r.created_at DESC, r.id DESC LIMIT ")
            .push_bind(i64::from(page.limit()))
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        let entities = page_query
            .build_query_as::<RecipeEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Page::new(
            self.hydrate(entities).await?,
            count.max(0) as u64,
            *page,
        ))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes r WHERE r.id = $1",
            RECIPE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_author(
        &self,
        author_id: &UserId,
        limit: u32,
    ) -> Result<Vec<Recipe>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes r WHERE r.author_id = $1 \
             ORDER BY r.created_at DESC, r.id DESC LIMIT $2",
            RECIPE_COLUMNS
        ))
        .bind(author_id.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.hydrate(entities).await
    }

    async fn count_by_author(&self, author_id: &UserId) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE author_id = $1")
            .bind(author_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }

    async fn get_ingredient_lines(
        &self,
        recipe_ids: &[Uuid],
    ) -> Result<Vec<RecipeIngredient>, RepositoryError> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, RecipeIngredientRow>(LINES_QUERY)
            .bind(recipe_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_domain()).collect())
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"INSERT INTO recipes (id, author_id, name, image, text, cooking_time, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                image = EXCLUDED.image,
                text = EXCLUDED.text,
                cooking_time = EXCLUDED.cooking_time,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(recipe.id)
        .bind(recipe.author_id.as_str())
        .bind(&recipe.name)
        .bind(&recipe.image)
        .bind(&recipe.text)
        .bind(recipe.cooking_time)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        for (position, line) in recipe.ingredients.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount, position)
                VALUES ($1, $2, $3, $4)"#,
            )
            .bind(recipe.id)
            .bind(line.ingredient_id)
            .bind(line.amount)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        for tag in &recipe.tags {
            sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
                .bind(recipe.id)
                .bind(tag.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
