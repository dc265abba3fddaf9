use crate::config::DatabaseConfig;
use sqlx::{
    PgPool, SqlitePool, postgres::PgPoolOptions, sqlite::SqlitePoolOptions,
};

pub async fn init_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections())
        .connect(config.database_url())
        .await?;

    tracing::debug!(max_connections = config.max_connections(), "sqlite pool ready");
    Ok(pool)
}

pub async fn init_pg_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections())
        .connect(config.database_url())
        .await?;

    tracing::debug!(max_connections = config.max_connections(), "postgres pool ready");
    Ok(pool)
}
