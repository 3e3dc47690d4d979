pub mod commands;
pub mod config;
pub mod error;
pub mod insights;
pub mod state;

use aervix_store::{Database, KvBackend, MemoryBackend, Store};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ClientConfig, StorageMode};

pub use crate::error::{ClientError, Result};
pub use crate::state::ClubSession;

/// Store over whichever backend the configuration selected.
pub type ConfiguredStore = Store<Box<dyn KvBackend>>;

/// Install the global tracing subscriber (respects `RUST_LOG`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("aervix_client=debug,aervix=debug,aervix_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Open the backend described by `config`.
pub fn open_store(config: &ClientConfig) -> Result<ConfiguredStore> {
    let backend: Box<dyn KvBackend> = match config.storage {
        StorageMode::Memory => {
            tracing::info!("using in-memory storage; data is discarded on exit");
            Box::new(MemoryBackend::new())
        }
        StorageMode::Sqlite => match &config.db_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "opening database");
                Box::new(Database::open_at(path)?)
            }
            None => Box::new(Database::new()?),
        },
    };
    Ok(Store::new(backend))
}
