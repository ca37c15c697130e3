use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter: `RUST_LOG` when set, else `log_level` for our code with the
/// database layers held at warn.
fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{log_level},actix_web=info,sqlx=warn,sea_orm=warn"))
    })
}

/// JSON lines in production; compact human-readable output elsewhere.
pub fn init_tracing(log_level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(log_level));

    if json {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .json()
                    .with_current_span(true),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_target(true))
            .init();
    }
}
