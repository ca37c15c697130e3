//! Test logging, shared by unit tests (via `ctor` in the backend lib) and
//! every integration test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet by default; expected unique-index violations would otherwise log at warn.
const DEFAULT_FILTER: &str = "warn,sqlx=error,sea_orm=error";

/// Install the test subscriber once. `TEST_LOG` wins over `RUST_LOG`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = ["TEST_LOG", "RUST_LOG"]
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .map(EnvFilter::new)
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be global (e.g. a test that set its own)
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .compact()
            .try_init();
    });
}
