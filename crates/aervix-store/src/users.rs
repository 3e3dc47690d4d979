use crate::backend::KvBackend;
use crate::collection::{self, CollectionKey};
use crate::error::Result;
use crate::models::User;
use crate::store::Store;

impl<B: KvBackend> Store<B> {
    /// All registered users in stored order.
    pub fn list_users(&self) -> Vec<User> {
        collection::read(self.backend(), &CollectionKey::Users)
    }

    /// Replace the user with the same id in place, or append a new one.
    pub fn upsert_user(&self, user: User) -> Result<()> {
        let mut users: Vec<User> = collection::load(self.backend(), &CollectionKey::Users)?;

        match users.iter().position(|u| u.id == user.id) {
            Some(index) => {
                tracing::debug!(user_id = %user.id, index, "replacing user");
                users[index] = user;
            }
            None => {
                tracing::debug!(user_id = %user.id, "appending user");
                users.push(user);
            }
        }

        collection::save(self.backend(), &CollectionKey::Users, &users)
    }
}

#[cfg(test)]
mod tests {
    use aervix_shared::types::UserId;

    use super::*;
    use crate::backend::MemoryBackend;

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::from(id),
            name: name.to_string(),
            department: "EE".into(),
            email: format!("{name}@example.org"),
            password: Some("pw".into()),
            profile_image: None,
        }
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn empty_store_has_no_users() {
        let store = Store::new(MemoryBackend::new());
        assert!(store.list_users().is_empty());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let store = Store::new(MemoryBackend::new());
        store.upsert_user(user("1", "A")).unwrap();
        store.upsert_user(user("2", "B")).unwrap();

        store.upsert_user(user("1", "A2")).unwrap();

        assert_eq!(names(&store.list_users()), vec!["A2", "B"]);
    }

    #[test]
    fn upsert_appends_unknown_ids() {
        let store = Store::new(MemoryBackend::new());
        store.upsert_user(user("1", "A")).unwrap();
        store.upsert_user(user("2", "B")).unwrap();

        let ids: Vec<String> = store.list_users().into_iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn repeated_reads_are_equal() {
        let store = Store::new(MemoryBackend::new());
        store.upsert_user(user("1", "A")).unwrap();
        assert_eq!(store.list_users(), store.list_users());
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let store = Store::new(MemoryBackend::new());
        store.upsert_user(user("1", "Sam")).unwrap();
        store.upsert_user(user("2", "Sam")).unwrap();
        assert_eq!(store.list_users().len(), 2);
    }

    #[test]
    fn corrupt_users_document_is_replaced_on_write() {
        let backend = MemoryBackend::new();
        backend.set("users", "garbage").unwrap();
        let store = Store::new(backend);

        assert!(store.list_users().is_empty());
        store.upsert_user(user("1", "A")).unwrap();
        assert_eq!(names(&store.list_users()), vec!["A"]);
    }
}
