use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::sensor::Reading;

/// Append-only store for one calendar day of readings. Each day gets its
/// own SQLite file under the data directory; the `envSense` table inside
/// accumulates rows across runs within that day. Rows are never updated
/// or deleted.
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Dataset file for `date`, e.g. `<data_dir>/2022-11-21.db`.
    pub fn path_for_date(data_dir: &Path, date: NaiveDate) -> PathBuf {
        data_dir.join(format!("{}.db", date.format("%Y-%m-%d")))
    }

    pub async fn open(data_dir: &Path, date: NaiveDate) -> Result<Self> {
        std::fs::create_dir_all(data_dir).with_context(|| {
            format!("failed to create data directory: {}", data_dir.display())
        })?;

        let path = Self::path_for_date(data_dir, date);
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        // Single connection: this process is the only writer.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open dataset file: {}", path.display()))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "envSense" (
                timestamp TEXT NOT NULL,
                id INTEGER NOT NULL,
                co2 REAL NOT NULL,
                temp_0 REAL NOT NULL,
                temp_1 REAL NOT NULL,
                humidity REAL NOT NULL,
                pm1_0 REAL NOT NULL,
                pm2_5 REAL NOT NULL,
                pm10_0 REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to create envSense table")?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_env_sense_timestamp ON "envSense"(timestamp)"#,
        )
        .execute(&self.pool)
        .await
        .context("failed to create timestamp index")?;

        sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_env_sense_id ON "envSense"(id)"#)
            .execute(&self.pool)
            .await
            .context("failed to create id index")?;

        Ok(())
    }

    pub async fn append(&self, reading: &Reading) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO "envSense" (timestamp, id, co2, temp_0, temp_1, humidity, pm1_0, pm2_5, pm10_0)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(reading.timestamp.to_rfc3339())
        .bind(reading.id)
        .bind(reading.co2)
        .bind(reading.temp_0)
        .bind(reading.temp_1)
        .bind(reading.humidity)
        .bind(reading.pm1_0)
        .bind(reading.pm2_5)
        .bind(reading.pm10_0)
        .execute(&self.pool)
        .await
        .context("failed to append reading")?;

        Ok(())
    }

    pub async fn row_count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "envSense""#)
            .fetch_one(&self.pool)
            .await
            .context("failed to count rows")?;

        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
