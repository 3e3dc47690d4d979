//! The storage contract consumed by the client layer.

use aervix_shared::types::{TaskId, UserId};

use crate::backend::KvBackend;
use crate::error::Result;
use crate::models::{BoardTask, Comment, Message, User};
use crate::store::Store;

/// Club data access.
///
/// Listings never fail: absent or corrupt collections read as empty.
/// Mutations fail only when the backing medium does. The store performs no
/// validation and no referential-integrity checks.
pub trait ClubStore {
    /// All registered users in stored order.
    fn list_users(&self) -> Vec<User>;

    /// Replace the user with the same id in place, or append.
    fn upsert_user(&self, user: User) -> Result<()>;

    /// One owner's tasks in stored order.
    fn list_tasks_for_owner(&self, user_id: &UserId) -> Vec<BoardTask>;

    /// Append a task to its owner's partition.
    fn append_task(&self, user_id: &UserId, task: BoardTask) -> Result<()>;

    /// Every task of every owner, newest first.
    fn list_all_tasks(&self) -> Vec<BoardTask>;

    /// Append a comment to a task. `Ok(false)` if the task does not exist.
    fn add_comment(&self, owner_id: &UserId, task_id: &TaskId, comment: Comment) -> Result<bool>;

    /// Messages sent or received by `user_id`, oldest first.
    fn list_messages_for(&self, user_id: &UserId) -> Vec<Message>;

    /// Append to the global message list.
    fn send_message(&self, message: Message) -> Result<()>;

    /// First user with the given id.
    fn find_user(&self, user_id: &UserId) -> Option<User> {
        self.list_users().into_iter().find(|u| &u.id == user_id)
    }

    /// Messages exchanged between `a` and `b`, oldest first.
    fn conversation(&self, a: &UserId, b: &UserId) -> Vec<Message> {
        self.list_messages_for(a)
            .into_iter()
            .filter(|m| m.is_between(a, b))
            .collect()
    }
}

impl<B: KvBackend> ClubStore for Store<B> {
    fn list_users(&self) -> Vec<User> {
        Store::list_users(self)
    }

    fn upsert_user(&self, user: User) -> Result<()> {
        Store::upsert_user(self, user)
    }

    fn list_tasks_for_owner(&self, user_id: &UserId) -> Vec<BoardTask> {
        Store::list_tasks_for_owner(self, user_id)
    }

    fn append_task(&self, user_id: &UserId, task: BoardTask) -> Result<()> {
        Store::append_task(self, user_id, task)
    }

    fn list_all_tasks(&self) -> Vec<BoardTask> {
        Store::list_all_tasks(self)
    }

    fn add_comment(&self, owner_id: &UserId, task_id: &TaskId, comment: Comment) -> Result<bool> {
        Store::add_comment(self, owner_id, task_id, comment)
    }

    fn list_messages_for(&self, user_id: &UserId) -> Vec<Message> {
        Store::list_messages_for(self, user_id)
    }

    fn send_message(&self, message: Message) -> Result<()> {
        Store::send_message(self, message)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use aervix_shared::types::{BoardId, CommentId, MessageId, Timestamp};

    use super::*;

    use crate::backend::{MemoryBackend, UnreadableBackend};
    use crate::{Database, StoreError};

    fn store_on_sqlite() -> Store<Database> {
        Store::new(Database::open_in_memory().unwrap())
    }

    fn msg(id: &str, from: &str, to: &str, ts: i64) -> Message {
        Message {
            id: MessageId::from(id),
            from_user_id: UserId::from(from),
            from_user_name: String::new(),
            to_user_id: UserId::from(to),
            text: String::new(),
            timestamp: Timestamp(ts),
        }
    }

    fn comment() -> Comment {
        Comment {
            id: CommentId::from("c1"),
            user_id: UserId::from("b"),
            user_name: "Bob".into(),
            user_profile: None,
            text: "nice".into(),
            timestamp: Timestamp(2),
        }
    }

    fn exercise_empty(store: &dyn ClubStore) {
        let nobody = UserId::from("nobody");
        assert!(store.list_users().is_empty());
        assert!(store.list_tasks_for_owner(&nobody).is_empty());
        assert!(store.list_all_tasks().is_empty());
        assert!(store.list_messages_for(&nobody).is_empty());
        assert!(store.find_user(&nobody).is_none());
    }

    #[test]
    fn every_listing_is_empty_on_fresh_backends() {
        exercise_empty(&Store::new(MemoryBackend::new()));
        exercise_empty(&store_on_sqlite());
    }

    #[test]
    fn conversation_is_pairwise() {
        let store = store_on_sqlite();
        store.send_message(msg("1", "a", "b", 1)).unwrap();
        store.send_message(msg("2", "b", "a", 2)).unwrap();
        store.send_message(msg("3", "a", "c", 3)).unwrap();

        let (a, b) = (UserId::from("a"), UserId::from("b"));
        let thread: Vec<String> = store
            .conversation(&a, &b)
            .into_iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(thread, vec!["1", "2"]);
        assert_eq!(store.conversation(&b, &a).len(), 2);
    }

    #[test]
    fn boxed_backend_store_is_a_club_store() {
        let backend: Box<dyn KvBackend> = Box::new(MemoryBackend::new());
        let store: Box<dyn ClubStore> = Box::new(Store::new(backend));
        store.send_message(msg("1", "a", "b", 1)).unwrap();
        assert_eq!(store.list_messages_for(&UserId::from("b")).len(), 1);
    }

    #[test]
    fn unreadable_backend_lists_empty_and_refuses_writes() {
        let store = Store::new(UnreadableBackend::default());
        exercise_empty(&store);
        assert!(store.conversation(&UserId::from("a"), &UserId::from("b")).is_empty());

        let user = User {
            id: UserId::from("u1"),
            name: "Ada".into(),
            department: String::new(),
            email: "ada@example.org".into(),
            password: None,
            profile_image: None,
        };
        assert!(matches!(store.upsert_user(user), Err(StoreError::Backend(_))));

        let task = BoardTask {
            id: TaskId::from("t1"),
            user_id: UserId::from("u1"),
            user_name: "Ada".into(),
            user_profile: None,
            board_id: BoardId::from("uno"),
            task_name: "Blink".into(),
            code_used: String::new(),
            circuit_design_image: None,
            reference_url: String::new(),
            timestamp: Timestamp(1),
            comments: Vec::new(),
        };
        assert!(store.append_task(&UserId::from("u1"), task).is_err());
        assert!(store.send_message(msg("1", "a", "b", 1)).is_err());
        assert!(store.add_comment(&UserId::from("u1"), &TaskId::from("t1"), comment()).is_err());

        assert_eq!(store.backend().writes.load(Ordering::SeqCst), 0);
    }
}
