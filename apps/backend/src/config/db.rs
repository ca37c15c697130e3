use crate::error::AppError;

/// Which backend a `DATABASE_URL` points at; drives pool options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    /// On-disk SQLite file
    SqliteFile,
    /// `sqlite::memory:`; every pooled connection would be a separate database
    SqliteMemory,
}

impl DbKind {
    pub fn from_url(url: &str) -> Result<Self, AppError> {
        let url = url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(DbKind::Postgres);
        }
        if url.starts_with("sqlite:") {
            if url.contains(":memory:") || url.contains("mode=memory") {
                return Ok(DbKind::SqliteMemory);
            }
            return Ok(DbKind::SqliteFile);
        }
        Err(AppError::config(format!(
            "Unsupported DATABASE_URL scheme: {}",
            url.split(':').next().unwrap_or_default()
        )))
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

/// SQLite files are created on first connect unless the URL already says otherwise.
pub fn normalize_sqlite_file_url(url: &str) -> String {
    if url.contains("mode=") {
        url.to_string()
    } else if url.contains('?') {
        format!("{url}&mode=rwc")
    } else {
        format!("{url}?mode=rwc")
    }
}
