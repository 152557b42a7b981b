//! Seeds the tag and ingredient catalogs.
//!
//! ```text
//! load-data tags
//! load-data ingredients data/ingredients.json
//! ```
//!
//! Both commands are idempotent: rows that already exist are skipped.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Deserialize;

use business::application::ingredient::import::ImportIngredientsUseCaseImpl;
use business::application::tag::seed::SeedTagsUseCaseImpl;
use business::domain::ingredient::use_cases::import::{
    ImportIngredientItem, ImportIngredientsParams, ImportIngredientsUseCase,
};
use business::domain::tag::model::default_tags;
use business::domain::tag::use_cases::seed::{SeedTagsParams, SeedTagsUseCase};
use logger::TracingLogger;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::tag::repository::TagRepositoryPostgres;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the default recipe tags
    Tags,
    /// Import ingredients from a JSON array of `{name, measurement_unit}`
    Ingredients {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    name: String,
    measurement_unit: String,
}

fn parse_ingredients(raw: &str) -> anyhow::Result<Vec<ImportIngredientItem>> {
    let records: Vec<IngredientRecord> =
        serde_json::from_str(raw).context("ingredient file is not a JSON array of records")?;
    Ok(records
        .into_iter()
        .map(|r| ImportIngredientItem {
            name: r.name,
            measurement_unit: r.measurement_unit,
        })
        .collect())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let migrations_path =
        std::env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool, &migrations_path).await?;

    let logger = Arc::new(TracingLogger);
    match cli.command {
        Command::Tags => {
            let use_case = SeedTagsUseCaseImpl {
                repository: Arc::new(TagRepositoryPostgres::new(pool)),
                logger,
            };
            let inserted = use_case
                .execute(SeedTagsParams {
                    tags: default_tags(),
                })
                .await?;
            tracing::info!(inserted, "Tags loaded");
        }
        Command::Ingredients { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("cannot read {}", file.display()))?;
            let items = parse_ingredients(&raw)?;
            let total = items.len();
            let use_case = ImportIngredientsUseCaseImpl {
                repository: Arc::new(IngredientRepositoryPostgres::new(pool)),
                logger,
            };
            let inserted = use_case.execute(ImportIngredientsParams { items }).await?;
            tracing::info!(inserted, total, "Ingredients loaded");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_ingredient_records() {
        let items = parse_ingredients(
            r#"[{"name": "flour", "measurement_unit": "g"}, {"name": "egg", "measurement_unit": "pcs"}]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "egg");
        assert_eq!(items[1].measurement_unit, "pcs");
    }

    #[test]
    fn should_reject_non_array_file() {
        assert!(parse_ingredients(r#"{"name": "flour"}"#).is_err());
    }

    #[test]
    fn should_parse_seed_subcommands() {
        let cli = Cli::try_parse_from(["load-data", "ingredients", "data/ingredients.json"]).unwrap();
        assert!(matches!(cli.command, Command::Ingredients { file } if file == PathBuf::from("data/ingredients.json")));

        let cli = Cli::try_parse_from(["load-data", "tags"]).unwrap();
        assert!(matches!(cli.command, Command::Tags));
    }
}
