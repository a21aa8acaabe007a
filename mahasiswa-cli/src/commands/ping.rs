//! Connectivity check: open the pool, run `SELECT 1`, close.

use anyhow::{Context, Result};
use clap::Args;

use mahasiswa_server::db;
use mahasiswa_server::DatabaseConfig;

use super::DatabaseArgs;

/// Arguments for the ping command
#[derive(Args)]
pub struct PingArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_ping(args: PingArgs) -> Result<()> {
    let database = DatabaseConfig::from(args.database);
    let url = database.redacted_url();

    let pool = db::connect(&database)
        .await
        .with_context(|| format!("failed to connect to database at {}", url))?;
    db::ping(&pool)
        .await
        .with_context(|| format!("database at {} did not answer", url))?;
    pool.close().await;

    println!("database reachable at {}", url);
    Ok(())
}
