//! Command handlers invoked by the UI layer.
//!
//! Each sub-module groups related commands by domain. They are `impl`
//! blocks on [`ClubSession`](crate::state::ClubSession) so every command
//! goes through the injected store.

pub mod auth;
pub mod community;
pub mod messaging;
pub mod profile;
pub mod projects;
