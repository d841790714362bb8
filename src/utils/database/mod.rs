#[cfg(test)]
pub mod memory;

use crate::utils::config::DatabaseConfig;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not connect to the database after {attempts} attempts: {source}")]
    Connect { attempts: u32, source: sqlx::Error },
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, Error> {
    let attempts = config.connect_retries.max(1);
    let mut attempt = 1;

    loop {
        match PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
        {
            Ok(pool) => return Ok(DatabaseConnection { pool }),
            Err(err) if attempt < attempts => {
                tracing::warn!(
                    "Database connection attempt {}/{} failed: {}. Retrying in {:?}",
                    attempt,
                    attempts,
                    err,
                    config.connect_retry_delay
                );
                tokio::time::sleep(config.connect_retry_delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!("Giving up on the database after {} attempts", attempts);
                return Err(Error::Connect {
                    attempts,
                    source: err,
                });
            }
        }
    }
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        Error::Migrate(err)
    })
}

#[async_trait]
pub trait Health: Send + Sync {
    async fn ping(&self) -> Result<(), String>;
}

#[async_trait]
impl Health for DatabaseConnection {
    async fn ping(&self) -> Result<(), String> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| err.to_string())
    }
}
