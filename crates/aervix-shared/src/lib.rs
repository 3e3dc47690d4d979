//! Types and constants shared by the Aervix store and client crates.

pub mod boards;
pub mod constants;
pub mod error;
pub mod types;
