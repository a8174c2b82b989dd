//! CLI command implementations.

pub mod profile;
pub mod summary;
