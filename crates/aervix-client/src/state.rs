//! Session state shared by every command.
//!
//! A [`ClubSession`] owns the injected store and the user currently logged
//! in. Commands live in [`crate::commands`] as `impl` blocks on this type.

use aervix_store::{ClubStore, User};

use crate::error::{ClientError, Result};

pub struct ClubSession<S> {
    store: S,
    /// `None` until `login` succeeds.
    current_user: Option<User>,
}

impl<S: ClubStore> ClubSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current_user: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub(crate) fn set_current_user(&mut self, user: Option<User>) {
        self.current_user = user;
    }

    pub(crate) fn require_user(&self) -> Result<&User> {
        self.current_user.as_ref().ok_or(ClientError::NotLoggedIn)
    }
}
