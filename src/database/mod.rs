use crate::domain::{BakedGood, Bakery, NewBakedGood};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::str::FromStr;
use std::time::Duration;

pub mod model;
pub mod seed;
pub mod sqlite;

// shared between handlers through AppState, so it has to be Send + Sync.
// every method borrows pooled connections only for the statements it runs and
// gives them back before returning, whatever the outcome.
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>>;
    async fn get_bakery(&self, id: i64) -> Result<Option<Bakery>>;

    /// Looks the bakery up and, when `name` is given, renames it.
    /// `None` means no bakery has this id.
    async fn rename_bakery(&self, id: i64, name: Option<&str>) -> Result<Option<Bakery>>;

    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>>;
    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>>;

    // write operations
    async fn save_baked_good(&self, baked_good: &NewBakedGood) -> Result<BakedGood>;

    /// Returns false when there was nothing to delete.
    async fn delete_baked_good(&self, id: i64) -> Result<bool>;
}

/// Opens the pool, creating the database file first if needed, and brings the
/// schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!(database_url, "database not found, creating");
        Sqlite::create_database(database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", database_url))?;
    }

    // baked_goods.bakery_id may point at a bakery that does not exist
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .foreign_keys(false)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to create pool on {}", database_url))?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
