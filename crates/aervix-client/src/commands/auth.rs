use aervix_shared::error::require;
use aervix_shared::types::UserId;
use aervix_store::{ClubStore, User};
use serde::Deserialize;
use tracing::info;

use crate::error::{ClientError, Result};
use crate::state::ClubSession;

/// Registration form as submitted by the UI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub name: String,
    #[serde(default)]
    pub department: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl<S: ClubStore> ClubSession<S> {
    /// Create an account. Does not log the new user in.
    pub fn register(&mut self, form: RegisterForm) -> Result<User> {
        require("name", &form.name)?;
        require("email", &form.email)?;
        require("password", &form.password)?;

        let user = User {
            id: UserId::new(),
            name: form.name,
            department: form.department,
            email: form.email,
            password: Some(form.password),
            profile_image: form.profile_image.filter(|img| !img.is_empty()),
        };
        self.store().upsert_user(user.clone())?;

        info!(user_id = %user.id, name = %user.name, "registered user");
        Ok(user)
    }

    /// Log in by name or email.
    ///
    /// The first stored user whose name or email equals `identifier` and
    /// whose password matches wins. Names and emails are not unique.
    pub fn login(&mut self, identifier: &str, password: &str) -> Result<User> {
        let user = self
            .store()
            .list_users()
            .into_iter()
            .find(|u| {
                (u.name == identifier || u.email == identifier)
                    && u.password.as_deref() == Some(password)
            })
            .ok_or(ClientError::InvalidCredentials)?;

        info!(user_id = %user.id, "logged in");
        self.set_current_user(Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user() {
            info!(user_id = %user.id, "logged out");
        }
        self.set_current_user(None);
    }
}
