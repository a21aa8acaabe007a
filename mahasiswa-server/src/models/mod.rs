//! Domain models
//!
//! Input is coerced to strings by the form extractor; no further
//! validation happens here.

pub mod student;

pub use student::Student;
