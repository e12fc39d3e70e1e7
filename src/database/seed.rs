use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

const SAMPLE_BAKERIES: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 3.0), ("Apple-frosted donut", 4.0)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 5.0), ("Chocolate cruller", 5.5)],
    ),
    (
        "Bold bagels",
        &[("Plain bagel", 2.0), ("Everything bagel", 2.5), ("Seeded rye bagel", 3.25)],
    ),
];

/// Fills an empty database with sample bakeries and their baked goods.
/// Returns how many bakeries were inserted; zero when bakeries already exist.
pub async fn seed_if_empty(pool: &Pool<Sqlite>) -> Result<usize> {
    let mut tx = pool.begin().await.context("Failed to open seed transaction")?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bakeries")
        .fetch_one(&mut *tx)
        .await
        .context("Failed to count bakeries")?;

    if count > 0 {
        tracing::debug!(count, "bakeries already present, skipping seed");
        return Ok(0);
    }

    for (bakery_name, goods) in SAMPLE_BAKERIES {
        let (bakery_id,): (i64,) =
            sqlx::query_as("INSERT INTO bakeries (name) VALUES (?) RETURNING id")
                .bind(*bakery_name)
                .fetch_one(&mut *tx)
                .await
                .with_context(|| format!("Failed to seed bakery {}", bakery_name))?;

        for (good_name, price) in goods.iter() {
            sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
                .bind(*good_name)
                .bind(*price)
                .bind(bakery_id)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("Failed to seed baked good {}", good_name))?;
        }
    }

    tx.commit().await.context("Failed to commit seed data")?;

    tracing::info!(bakeries = SAMPLE_BAKERIES.len(), "seeded sample data");

    Ok(SAMPLE_BAKERIES.len())
}
