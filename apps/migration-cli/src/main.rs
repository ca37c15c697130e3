use clap::Parser;
use migration::sea_orm::{ConnectOptions, Database};
use migration::{migrate, MigrationCommand};

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "SmartForce database migration tool")]
struct Args {
    /// Migration command to run: up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Database URL; falls back to DATABASE_URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if args.database_url.contains(":memory:") {
        eprintln!("In-memory SQLite databases are discarded when the CLI exits; use a file or Postgres URL.");
        std::process::exit(2);
    }

    let mut opts = ConnectOptions::new(args.database_url.clone());
    opts.max_connections(1).sqlx_logging(false);

    let db = match Database::connect(opts).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
