use crate::database::model::{DbBakedGood, DbBakery};
use crate::database::BakeryRepository;
use crate::domain::{BakedGood, Bakery, NewBakedGood};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Executor, Pool, Sqlite};
use std::collections::HashMap;

const BAKERY_COLUMNS: &str = "id, name, created_at, updated_at";
const BAKED_GOOD_COLUMNS: &str = "id, name, price, bakery_id, created_at, updated_at";

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

async fn fetch_bakery<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<DbBakery>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, DbBakery>(&format!(
        "SELECT {} FROM bakeries WHERE id = ?",
        BAKERY_COLUMNS
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

async fn fetch_baked_goods_of<'e, E>(executor: E, bakery_id: i64) -> sqlx::Result<Vec<BakedGood>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, DbBakedGood>(&format!(
        "SELECT {} FROM baked_goods WHERE bakery_id = ? ORDER BY id",
        BAKED_GOOD_COLUMNS
    ))
    .bind(bakery_id)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(BakedGood::from).collect())
}

#[async_trait]
impl BakeryRepository for SqliteRepository {
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>> {
        let db_bakeries = sqlx::query_as::<_, DbBakery>(&format!(
            "SELECT {} FROM bakeries ORDER BY id",
            BAKERY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to load bakeries")?;

        // baked goods of every bakery in a single query
        let db_baked_goods = sqlx::query_as::<_, DbBakedGood>(&format!(
            "SELECT {} FROM baked_goods WHERE bakery_id IS NOT NULL ORDER BY id",
            BAKED_GOOD_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to load baked goods")?;

        let mut goods_by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for row in db_baked_goods {
            if let Some(bakery_id) = row.bakery_id {
                goods_by_bakery
                    .entry(bakery_id)
                    .or_default()
                    .push(row.into());
            }
        }

        let bakeries = db_bakeries
            .into_iter()
            .map(|db_bakery| {
                let goods = goods_by_bakery.remove(&db_bakery.id).unwrap_or_default();
                db_bakery.into_bakery(goods)
            })
            .collect();

        Ok(bakeries)
    }

    async fn get_bakery(&self, id: i64) -> Result<Option<Bakery>> {
        let db_bakery = match fetch_bakery(&self.pool, id)
            .await
            .with_context(|| format!("Failed to load bakery {}", id))?
        {
            Some(db_bakery) => db_bakery,
            None => return Ok(None),
        };

        let goods = fetch_baked_goods_of(&self.pool, id)
            .await
            .with_context(|| format!("Failed to load baked goods of bakery {}", id))?;

        Ok(Some(db_bakery.into_bakery(goods)))
    }

    async fn rename_bakery(&self, id: i64, name: Option<&str>) -> Result<Option<Bakery>> {
        // a single autocommit statement, concurrent writers queue on the busy timeout
        let db_bakery = match name {
            Some(name) => sqlx::query_as::<_, DbBakery>(&format!(
                r#"
                UPDATE bakeries
                SET name = ?, updated_at = CURRENT_TIMESTAMP
                WHERE id = ?
                RETURNING {}
                "#,
                BAKERY_COLUMNS
            ))
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to rename bakery {}", id))?,
            None => fetch_bakery(&self.pool, id)
                .await
                .with_context(|| format!("Failed to load bakery {}", id))?,
        };

        let Some(db_bakery) = db_bakery else {
            return Ok(None);
        };

        if name.is_some() {
            tracing::info!("Renamed {}", db_bakery);
        }

        let goods = fetch_baked_goods_of(&self.pool, id)
            .await
            .with_context(|| format!("Failed to load baked goods of bakery {}", id))?;

        Ok(Some(db_bakery.into_bakery(goods)))
    }

    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>> {
        let rows = sqlx::query_as::<_, DbBakedGood>(&format!(
            "SELECT {} FROM baked_goods ORDER BY price DESC, id ASC",
            BAKED_GOOD_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to load baked goods by price")?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>> {
        let row = sqlx::query_as::<_, DbBakedGood>(&format!(
            "SELECT {} FROM baked_goods ORDER BY price DESC, id ASC LIMIT 1",
            BAKED_GOOD_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load most expensive baked good")?;

        Ok(row.map(BakedGood::from))
    }

    async fn save_baked_good(&self, baked_good: &NewBakedGood) -> Result<BakedGood> {
        let row = sqlx::query_as::<_, DbBakedGood>(&format!(
            r#"
            INSERT INTO baked_goods (name, price, bakery_id)
            VALUES (?, ?, ?)
            RETURNING {}
            "#,
            BAKED_GOOD_COLUMNS
        ))
        .bind(&baked_good.name)
        .bind(baked_good.price)
        .bind(baked_good.bakery_id)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Failed to save baked good {}", baked_good.name))?;

        tracing::info!("Inserted {}", row);

        Ok(row.into())
    }

    async fn delete_baked_good(&self, id: i64) -> Result<bool> {
        let deleted = sqlx::query_as::<_, DbBakedGood>(&format!(
            "DELETE FROM baked_goods WHERE id = ? RETURNING {}",
            BAKED_GOOD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to delete baked good {}", id))?;

        match deleted {
            Some(row) => {
                tracing::info!("Deleted {}", row);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
