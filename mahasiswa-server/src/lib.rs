//! mahasiswa-server: HTTP service for student records
//!
//! Five endpoints under `/mahasiswa` map one-to-one onto SQL statements
//! against the `mahasiswa` table. Every request leases its own connection
//! from a sqlx pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{create_pool, create_pool_with_options, DbError, StudentRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::Student;
