//! Repository implementations for database access

pub mod students;

pub use students::{DbError, StudentRepo};
