use std::env;

use smartforce::{build_state, AppError, AppState, SecurityConfig};

pub const TEST_SECRET: &str = "integration-test-signing-key";

/// Cheapest bcrypt cost; hashing strength is not under test.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET).with_bcrypt_cost(4)
}

/// `SMARTFORCE_TEST_DB_URL` when set, else a fresh in-memory SQLite database.
pub fn test_db_url() -> String {
    env::var("SMARTFORCE_TEST_DB_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "sqlite::memory:".to_string())
}

/// Migrated database plus test security settings.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state(test_security())
        .with_db_url(test_db_url())
        .build()
        .await
}

/// No database at all; anything past the header and token checks fails.
pub fn build_state_without_db() -> AppState {
    AppState::without_db(test_security())
}
