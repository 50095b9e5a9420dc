//! Shared building blocks for the catalog binaries and crates.

pub mod types;
pub mod utils;
