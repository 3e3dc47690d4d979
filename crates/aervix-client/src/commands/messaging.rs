use aervix_shared::error::require;
use aervix_shared::types::{MessageId, Timestamp, UserId};
use aervix_store::{ClubStore, Message, User};
use tracing::info;

use crate::error::{ClientError, Result};
use crate::state::ClubSession;

impl<S: ClubStore> ClubSession<S> {
    /// Send a direct message from the current user to `to`.
    pub fn send_message(&self, to: &UserId, text: &str) -> Result<Message> {
        let sender = self.require_user()?;
        require("text", text)?;
        if self.store().find_user(to).is_none() {
            return Err(ClientError::UnknownUser(to.to_string()));
        }

        let message = Message {
            id: MessageId::new(),
            from_user_id: sender.id.clone(),
            from_user_name: sender.name.clone(),
            to_user_id: to.clone(),
            text: text.to_string(),
            timestamp: Timestamp::now(),
        };
        self.store().send_message(message.clone())?;

        info!(message_id = %message.id, from = %sender.id, %to, "message sent");
        Ok(message)
    }

    /// Everything the current user sent or received, oldest first.
    pub fn inbox(&self) -> Result<Vec<Message>> {
        let me = self.require_user()?;
        Ok(self.store().list_messages_for(&me.id))
    }

    /// The thread between the current user and `peer`, oldest first.
    pub fn conversation_with(&self, peer: &UserId) -> Result<Vec<Message>> {
        let me = self.require_user()?;
        Ok(self.store().conversation(&me.id, peer))
    }

    /// Contact list: every member except the current user.
    pub fn directory(&self) -> Result<Vec<User>> {
        let me = self.require_user()?;
        let mut users = self.store().list_users();
        users.retain(|u| u.id != me.id);
        Ok(users)
    }
}
