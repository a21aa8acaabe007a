//! mahasiswa CLI - runs the student record HTTP service
//!
//! - `serve`: connect to the database and serve `/mahasiswa` until shutdown
//! - `ping`: check that the configured database is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser)]
#[command(
    name = "mahasiswa",
    author,
    version,
    about = "CRUD HTTP service for student (mahasiswa) records"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check database connectivity and exit
    Ping(commands::ping::PingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    config::report_dotenv(dotenv.as_ref());

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::Ping(args) => commands::ping::run_ping(args).await?,
    }

    Ok(())
}
