use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;

/// Shared per-process state handed to handlers through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never reach the store)
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
        }
    }

    /// State with no database; any handler that needs one answers `DbUnavailable`.
    pub fn without_db(security: SecurityConfig) -> Self {
        Self { db: None, security }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
