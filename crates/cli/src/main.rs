//! `job-board` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — apply pending migrations, then start the HTTP API.
//! - `migrate` — run pending database migrations and exit.

mod config;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use board::PgStore;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DatabaseArgs;

#[derive(Parser)]
#[command(
    name = "job-board",
    about = "Job board HTTP/JSON backend",
    version
)]
struct Cli {
    #[command(flatten)]
    db: DatabaseArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
        host: IpAddr,

        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,

        /// The single origin allowed to make credentialed cross-origin calls.
        #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:5173")]
        cors_origin: String,
    },
    /// Run pending database migrations.
    Migrate,
}

async fn connect(settings: &DatabaseArgs) -> anyhow::Result<db::DbPool> {
    let options = settings
        .connect_options()
        .context("invalid database configuration")?;
    db::pool::create_pool(options, settings.max_connections)
        .await
        .context("failed to connect to PostgreSQL")
}

async fn serve(settings: DatabaseArgs, addr: SocketAddr, cors_origin: &str) -> anyhow::Result<()> {
    let cors = api::cors_layer(cors_origin)
        .with_context(|| format!("invalid CORS origin {cors_origin:?}"))?;

    let pool = connect(&settings).await?;
    db::pool::run_migrations(&pool)
        .await
        .context("migration failed")?;

    let store = Arc::new(PgStore::new(pool));
    let app = api::router(api::AppState::with_store(store.clone()), cors);

    info!(%addr, origin = cors_origin, "Starting API server");
    let served = api::serve(addr, app, api::shutdown_signal()).await;

    store.close().await;
    served.context("server error")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port, cors_origin } => {
            serve(cli.db, SocketAddr::new(host, port), &cors_origin).await?;
        }
        Command::Migrate => {
            let pool = connect(&cli.db).await?;
            db::pool::run_migrations(&pool)
                .await
                .context("migration failed")?;
            pool.close().await;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
