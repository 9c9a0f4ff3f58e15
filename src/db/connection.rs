//! Pool setup

use std::time::Duration;

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{config::DatabaseConfig, constants::DATABASE_ACQUIRE_TIMEOUT_SECS};

/// Open the pool, check the server answers and bring the schema up to date
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(DATABASE_ACQUIRE_TIMEOUT_SECS))
        .connect(&config.url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let version: String = sqlx::query_scalar("SHOW server_version")
        .fetch_one(&pool)
        .await?;
    tracing::info!(
        %version,
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    super::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
