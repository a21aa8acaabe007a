//! Database layer - connection pool and repository
//!
//! # Design Principles
//!
//! - Connection pool, one lease per request - no shared connection or cursor
//! - One statement per operation, auto-committed
//! - No existence checks before UPDATE/DELETE

pub mod pool;
pub mod repos;

pub use pool::{connect, create_pool, create_pool_with_options, ping};
pub use repos::{DbError, StudentRepo};
