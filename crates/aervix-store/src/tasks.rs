use aervix_shared::types::{TaskId, UserId};

use crate::backend::KvBackend;
use crate::collection::{self, CollectionKey};
use crate::error::Result;
use crate::models::{BoardTask, Comment};
use crate::store::Store;

impl<B: KvBackend> Store<B> {
    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// The owner's task partition in stored order.
    pub fn list_tasks_for_owner(&self, user_id: &UserId) -> Vec<BoardTask> {
        collection::read(self.backend(), &CollectionKey::Tasks(user_id.clone()))
    }

    /// Every owner's tasks, newest first.
    ///
    /// Scans all keys of the backend; partitions are not indexed.
    pub fn list_all_tasks(&self) -> Vec<BoardTask> {
        let keys = match self.backend().keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "failed to enumerate collections");
                return Vec::new();
            }
        };

        let mut tasks: Vec<BoardTask> = keys
            .iter()
            .filter_map(|key| match CollectionKey::parse(key) {
                Some(key @ CollectionKey::Tasks(_)) => Some(key),
                _ => None,
            })
            .flat_map(|key| collection::read::<BoardTask, _>(self.backend(), &key))
            .collect();

        tasks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tasks
    }

    // ------------------------------------------------------------------
    // Write
    // ------------------------------------------------------------------

    /// Append to the owner's partition.
    pub fn append_task(&self, user_id: &UserId, task: BoardTask) -> Result<()> {
        let key = CollectionKey::Tasks(user_id.clone());
        let mut tasks: Vec<BoardTask> = collection::load(self.backend(), &key)?;

        tracing::debug!(owner = %user_id, task_id = %task.id, "appending task");
        tasks.push(task);

        collection::save(self.backend(), &key, &tasks)
    }

    /// Append a comment to `task_id` in `owner_id`'s partition.
    ///
    /// Returns `false` without writing anything when the task is not found.
    pub fn add_comment(&self, owner_id: &UserId, task_id: &TaskId, comment: Comment) -> Result<bool> {
        let key = CollectionKey::Tasks(owner_id.clone());
        let mut tasks: Vec<BoardTask> = collection::load(self.backend(), &key)?;

        let Some(task) = tasks.iter_mut().find(|t| &t.id == task_id) else {
            tracing::debug!(owner = %owner_id, %task_id, "comment target not found");
            return Ok(false);
        };
        task.comments.push(comment);

        collection::save(self.backend(), &key, &tasks)?;
        Ok(true)
    }
}
