//! # aervix-store
//!
//! Local persistence for the Aervix club application.
//!
//! Data lives in three kinds of JSON collections (`users`, `tasks:<userId>`
//! and `messages`) held in a synchronous key-value medium: a SQLite file via
//! [`Database`] or a process-local [`MemoryBackend`]. [`Store`] implements
//! the [`ClubStore`] contract on top of either.

pub mod backend;
pub mod collection;
pub mod database;
pub mod migrations;
pub mod models;
pub mod store;
pub mod traits;

mod error;
mod messages;
mod tasks;
mod users;

pub use backend::{KvBackend, MemoryBackend};
pub use collection::CollectionKey;
pub use database::Database;
pub use error::{Result, StoreError};
pub use models::*;
pub use store::Store;
pub use traits::ClubStore;
