//! Environment loading
//!
//! A `.env` in the current directory is read before arguments are parsed,
//! so its values feed clap's `env` fallbacks. Variables already present in
//! the process environment are never overwritten.

use std::path::PathBuf;

/// Load `.env` from the current directory, returning its path if found.
///
/// Runs before tracing is initialized; the caller logs the outcome.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Log where configuration came from.
pub fn report_dotenv(loaded: Option<&PathBuf>) {
    match loaded {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::debug!("No .env file found, using environment variables only"),
    }
}
