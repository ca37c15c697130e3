use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use smartforce::config::app::AppConfig;
use smartforce::infra::state::build_state;
use smartforce::middleware::{
    cors_middleware, rate_limit_config, rate_limited_response, RequestTrace, SecurityHeaders,
    StructuredLogger, TraceSpan,
};
use smartforce::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Environment variables come from the runtime (docker env_file, systemd, shell)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(&config.log_level, config.is_production());

    info!(
        environment = %config.environment,
        host = %config.host,
        port = config.port,
        "starting SmartForce backend"
    );

    let app_state = match build_state(config.security())
        .with_db_url(config.database_url.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!("database connected and migrated");

    let data = web::Data::new(app_state);
    let origins = config.allowed_origins.clone();
    let hsts = config.is_production();
    let per_minute = config.rate_limit_per_minute;
    // One backend shared by every worker so the window is global
    let rate_backend = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let limiter = RateLimiter::builder(rate_backend.clone(), rate_limit_config(per_minute).build())
            .add_headers()
            .request_denied_response(move |_| rate_limited_response(per_minute))
            .build();

        App::new()
            .wrap(limiter)
            .wrap(SecurityHeaders::new(hsts))
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
