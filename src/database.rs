// src/database.rs
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// Opens the shared pool and checks that one connection can be acquired.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await?;

    tracing::info!(max_connections = config.db_max_connections, "Connected to the database");
    Ok(pool)
}
