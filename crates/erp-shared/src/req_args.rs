//! This module stores the expected format of the arguments for the requests.
//! Passwords are kept in [`SecretString`] and only exposed when the request
//! body is built

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

#[derive(serde::Deserialize, Clone)]
pub struct LoginReqArgs {
    pub username: String,
    pub password: SecretString,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(username: S, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(mut self, username: String) -> Self {
        self.username = username;
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("username", &self.username)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

/// Asks the backend to start the reset flow for the account with this email
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct PasswordResetReqArgs {
    pub email: String,
}

#[derive(serde::Deserialize)]
pub struct ChangePasswordReqArgs {
    pub current_password: SecretString,
    pub new_password: SecretString,
    pub new_password_check: SecretString,
}

impl Debug for ChangePasswordReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordReqArgs")
            .field(
                "new_passwords_match",
                &(self.new_password.expose_secret() == self.new_password_check.expose_secret()),
            )
            .finish_non_exhaustive()
    }
}
