//! HTTP server command
//!
//! Connects the pool (fatal on failure), then serves until Ctrl+C/SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use mahasiswa_server::db;
use mahasiswa_server::http::{run_server, ServerConfig};
use mahasiswa_server::DatabaseConfig;

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "APP_HOST", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "APP_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Seconds before an in-flight request is abandoned
    #[arg(long, env = "APP_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "APP_CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout),
    };
    let database = DatabaseConfig::from(args.database);

    let pool = db::connect(&database)
        .await
        .with_context(|| format!("failed to connect to database at {}", database.redacted_url()))?;

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
