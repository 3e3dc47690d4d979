//! # aervix
//!
//! Opens the configured club store and prints the community feed, newest
//! first. Configuration comes from the environment (see
//! [`aervix_client::config::ClientConfig`]).

use aervix_client::config::ClientConfig;
use aervix_client::{init_tracing, open_store};
use aervix_shared::boards;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting {} v{}", aervix_shared::constants::APP_NAME, env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    info!(?config, "Loaded configuration");

    let store = open_store(&config)?;
    let users = store.list_users();
    let feed = store.list_all_tasks();
    info!(users = users.len(), tasks = feed.len(), "store opened");

    for task in &feed {
        let board = match boards::find(&task.board_id) {
            Some(b) => b.name,
            None => task.board_id.as_str(),
        };
        let when = task
            .timestamp
            .to_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        println!(
            "{when}  {:<20} {:<18} {} ({} comments)",
            task.user_name,
            board,
            task.task_name,
            task.comments.len()
        );
    }

    Ok(())
}
