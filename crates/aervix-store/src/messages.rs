use aervix_shared::types::UserId;

use crate::backend::KvBackend;
use crate::collection::{self, CollectionKey};
use crate::error::Result;
use crate::models::Message;
use crate::store::Store;

impl<B: KvBackend> Store<B> {
    /// Messages sent or received by `user_id`, oldest first.
    pub fn list_messages_for(&self, user_id: &UserId) -> Vec<Message> {
        let mut messages: Vec<Message> = collection::read(self.backend(), &CollectionKey::Messages);
        messages.retain(|m| m.involves(user_id));
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    /// Append to the global message list.
    pub fn send_message(&self, message: Message) -> Result<()> {
        let mut messages: Vec<Message> = collection::load(self.backend(), &CollectionKey::Messages)?;

        tracing::debug!(
            message_id = %message.id,
            from = %message.from_user_id,
            to = %message.to_user_id,
            "appending message"
        );
        messages.push(message);

        collection::save(self.backend(), &CollectionKey::Messages, &messages)
    }
}
