//! Named collections and their JSON codec.
//!
//! A collection is always read and written whole. Two read paths exist:
//! [`read`] never fails and is used by listings, [`load`] propagates backend
//! failures and is used before a write so that a failed read is never
//! followed by an overwrite.
//!
//! Records are decoded one by one: a record of unexpected shape is skipped
//! without hiding its well-formed neighbours.

use aervix_shared::constants::{MESSAGES_KEY, TASKS_PREFIX, USERS_KEY};
use aervix_shared::types::UserId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::KvBackend;
use crate::error::Result;

/// Logical collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Users,
    /// One partition per task owner.
    Tasks(UserId),
    Messages,
}

impl CollectionKey {
    /// Storage key, e.g. `tasks:42`.
    pub fn render(&self) -> String {
        match self {
            Self::Users => USERS_KEY.to_string(),
            Self::Tasks(owner) => format!("{TASKS_PREFIX}{owner}"),
            Self::Messages => MESSAGES_KEY.to_string(),
        }
    }

    /// Inverse of [`render`](Self::render). Unrelated keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            USERS_KEY => Some(Self::Users),
            MESSAGES_KEY => Some(Self::Messages),
            _ => key
                .strip_prefix(TASKS_PREFIX)
                .map(|owner| Self::Tasks(UserId::from(owner))),
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Load a collection ahead of a write.
///
/// Absent or malformed documents read as empty; backend failures propagate.
pub(crate) fn load<T, B>(backend: &B, key: &CollectionKey) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    B: KvBackend + ?Sized,
{
    let Some(raw) = backend.get(&key.render())? else {
        return Ok(Vec::new());
    };
    Ok(decode(key, &raw))
}

/// Read a collection for display. Never fails.
pub(crate) fn read<T, B>(backend: &B, key: &CollectionKey) -> Vec<T>
where
    T: DeserializeOwned,
    B: KvBackend + ?Sized,
{
    match load(backend, key) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(%key, error = %e, "collection read failed, treating as empty");
            Vec::new()
        }
    }
}

/// Encode and overwrite a whole collection.
pub(crate) fn save<T, B>(backend: &B, key: &CollectionKey, items: &[T]) -> Result<()>
where
    T: Serialize,
    B: KvBackend + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    backend.set(&key.render(), &raw)?;
    tracing::debug!(%key, count = items.len(), bytes = raw.len(), "collection written");
    Ok(())
}

fn decode<T: DeserializeOwned>(key: &CollectionKey, raw: &str) -> Vec<T> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(%key, error = %e, "malformed collection, treating as empty");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(%key, index, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}
