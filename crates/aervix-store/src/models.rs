//! Domain records persisted as JSON collections.
//!
//! Field names are camelCase on the wire and optional fields are omitted
//! when absent, so documents written by older front-ends decode unchanged.

use aervix_shared::types::{BoardId, CommentId, MessageId, TaskId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered club member.
///
/// Name and email are not unique; only `id` is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub department: String,
    pub email: String,
    /// Stored and compared in plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Encoded image (data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

// ---------------------------------------------------------------------------
// BoardTask
// ---------------------------------------------------------------------------

/// A project logged against a catalogue board.
///
/// `user_name` and `user_profile` are copies of the owner's profile taken at
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardTask {
    pub id: TaskId,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<String>,
    pub board_id: BoardId,
    pub task_name: String,
    pub code_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_design_image: Option<String>,
    pub reference_url: String,
    pub timestamp: Timestamp,
    /// Append-only, in insertion order. Missing in older documents.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<String>,
    pub text: String,
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A direct message. Conversations are derived by filtering, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub from_user_id: UserId,
    #[serde(default)]
    pub from_user_name: String,
    pub to_user_id: UserId,
    pub text: String,
    pub timestamp: Timestamp,
}

impl Message {
    /// True if `user` sent or received this message.
    pub fn involves(&self, user: &UserId) -> bool {
        &self.from_user_id == user || &self.to_user_id == user
    }

    /// True if this message belongs to the conversation `{a, b}`.
    pub fn is_between(&self, a: &UserId, b: &UserId) -> bool {
        (&self.from_user_id == a && &self.to_user_id == b)
            || (&self.from_user_id == b && &self.to_user_id == a)
    }
}
