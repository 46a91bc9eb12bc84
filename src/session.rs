//! The logged-in identity.
//!
//! At most one identity is active at a time and it is stored in the key-value
//! store so that it survives restarts. There is no password check: any
//! non-empty username and password pair is accepted.

use std::fmt::Display;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    storage::{APP_KEY_PREFIX, get_json, remove_item, set_json},
};

/// A validated, non-empty username.
///
/// Stored usernames go through the same checks as typed ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String")]
pub struct Username(String);

impl Username {
    /// Create a username from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyUsername] if `name` is empty
    /// or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyUsername)
        } else {
            Ok(Self(name.to_owned()))
        }
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The currently logged-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The name the user logged in with.
    pub username: Username,
}

/// The storage key for the active identity.
pub fn user_key() -> String {
    format!("{APP_KEY_PREFIX}-user")
}

/// Log in as `username` and make it the active identity.
///
/// Any previously active identity is replaced.
///
/// # Errors
///
/// - [Error::EmptyUsername] if the username is empty after trimming.
/// - [Error::EmptyPassword] if the password is empty.
///
/// Nothing is stored when either check fails.
pub fn log_in(username: &str, password: &str, connection: &Connection) -> Result<Identity, Error> {
    let username = Username::new(username)?;

    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    let identity = Identity { username };
    set_json(&user_key(), &identity, connection)?;

    tracing::info!("Logged in as {}", identity.username);

    Ok(identity)
}

/// Clear the active identity.
pub fn log_out(connection: &Connection) -> Result<(), Error> {
    remove_item(&user_key(), connection)
}

/// Get the active identity, if anyone is logged in.
///
/// An identity that cannot be read counts as logged out. The next log in
/// replaces it.
pub fn current_user(connection: &Connection) -> Result<Option<Identity>, Error> {
    match get_json(&user_key(), connection) {
        Err(error @ Error::UnreadableValue(_)) => {
            tracing::warn!("Treating the session as logged out: {error}");
            Ok(None)
        }
        result => result,
    }
}
