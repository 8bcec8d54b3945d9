use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
  let pool = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(Duration::from_secs(5))
    .connect(&config.database_url)
    .await?;

  tracing::info!("Connected to PostgreSQL");

  Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
  sqlx::migrate!("./migrations").run(pool).await?;
  tracing::info!("Database migrations applied successfully");
  Ok(())
}
