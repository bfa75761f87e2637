use log::{error, info};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::Config;

/// Builds the connection pool without touching the network. A malformed URL
/// is a configuration error and fails here; an unreachable database is not,
/// requests surface 503 until the pool can reconnect.
pub fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .test_before_acquire(true)
        .connect_lazy(&config.database_url)
}

/// Startup connectivity probe with bounded retry. Logs the outcome and
/// returns either way; the service starts even when the database is down.
pub async fn probe_connection(pool: &PgPool) {
    for attempt in 1..=3 {
        match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => {
                info!("Database connection established");
                return;
            }
            Err(err) => {
                error!("Database probe attempt {}/3 failed: {}", attempt, err);
                if attempt < 3 {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
            }
        }
    }
    error!("Database unreachable at startup; requests will fail until it recovers");
}
