//! Subcommand implementations

pub mod ping;
pub mod serve;

use std::time::Duration;

use clap::Args;
use mahasiswa_server::DatabaseConfig;

/// Database connection flags shared by every subcommand
#[derive(Args)]
pub struct DatabaseArgs {
    /// Full database URL (mysql://... or sqlite:...); overrides the --db-* parts
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASS", default_value = "", hide_env_values = true, hide_default_value = true)]
    pub db_pass: String,

    /// Database (schema) name
    #[arg(long, env = "DB_DATABASE", default_value = "mahasiswa")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds a request may wait for a pooled connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub acquire_timeout: u64,
}

impl From<DatabaseArgs> for DatabaseConfig {
    fn from(args: DatabaseArgs) -> Self {
        Self {
            url: args.database_url,
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_pass,
            database: args.db_name,
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.acquire_timeout),
        }
    }
}
