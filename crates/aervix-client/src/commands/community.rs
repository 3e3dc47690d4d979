use aervix_shared::error::require;
use aervix_shared::types::{CommentId, TaskId, Timestamp, UserId};
use aervix_store::{BoardTask, ClubStore, Comment};
use tracing::{debug, info};

use crate::error::Result;
use crate::state::ClubSession;

impl<S: ClubStore> ClubSession<S> {
    /// Every member's projects, newest first.
    pub fn community_feed(&self) -> Vec<BoardTask> {
        self.store().list_all_tasks()
    }

    /// Comment on `task_owner`'s task as the current user.
    ///
    /// Returns `false` when the task no longer exists; nothing is stored then.
    pub fn comment(&self, task_owner: &UserId, task_id: &TaskId, text: &str) -> Result<bool> {
        let author = self.require_user()?;
        require("text", text)?;

        let comment = Comment {
            id: CommentId::new(),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_profile: author.profile_image.clone(),
            text: text.to_string(),
            timestamp: Timestamp::now(),
        };

        let added = self.store().add_comment(task_owner, task_id, comment)?;
        if added {
            info!(%task_id, owner = %task_owner, author = %author.id, "comment added");
        } else {
            debug!(%task_id, owner = %task_owner, "comment target missing");
        }
        Ok(added)
    }
}
