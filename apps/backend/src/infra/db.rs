use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{normalize_sqlite_file_url, DbKind};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

fn db_engine(kind: &DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays; returns the last error.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    interval_ms,
                    error = %e,
                    "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn connect_options(url: &str, kind: &DbKind) -> ConnectOptions {
    let url = match kind {
        DbKind::SqliteFile => normalize_sqlite_file_url(url),
        _ => url.to_string(),
    };

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5));

    match kind {
        // One connection, or each pool member would see its own empty database
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(5);
        }
        DbKind::Postgres => {
            opts.max_connections(20).min_connections(1);
        }
    }
    opts
}

/// Open a pool for `url`. Does NOT run migrations.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let kind = DbKind::from_url(url)?;
    let attempts = if kind == DbKind::SqliteMemory {
        1
    } else {
        CONNECT_ATTEMPTS
    };

    retry_connection(
        || {
            let opts = connect_options(url, &kind);
            async move { Database::connect(opts).await.map_err(AppError::from) }
        },
        attempts,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await
}

/// Connect and bring the schema up to date; the single entrypoint used by state building.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let kind = DbKind::from_url(url)?;
    let conn = connect_db(url).await?;

    migrate(&conn, MigrationCommand::Up).await.map_err(|e| {
        AppError::config(format!("Migration failed on {}: {e}", db_engine(&kind)))
    })?;

    info!(engine = db_engine(&kind), "database ready");
    Ok(conn)
}
