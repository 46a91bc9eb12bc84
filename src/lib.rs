//! SpendSpark is a small web app for keeping track of daily spending.
//!
//! Log in with any username, record what you spent today and see the daily
//! and monthly totals broken down as pie charts. All data is kept in a local
//! SQLite file.
//!
//! This library provides the HTTP server, which directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod app_state;
mod charts;
mod daily;
mod db;
mod endpoints;
mod expense;
mod html;
mod internal_server_error;
mod logging;
mod monthly;
mod not_found;
mod panel;
mod profile;
mod routing;
mod session;
mod storage;
mod tabs;
mod timezone;
mod tracker;
mod view;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use expense::{Expense, ExpenseName, save_expenses};
pub use logging::logging_middleware;
pub use routing::build_router;
pub use session::{Identity, Username, log_in};

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string (or just whitespace) was used as an expense name.
    #[error("expense name cannot be empty")]
    EmptyExpenseName,

    /// The amount entered for an expense is not a positive number.
    ///
    /// Holds the raw text that was entered.
    #[error("\"{0}\" is not a positive amount")]
    InvalidAmount(String),

    /// An empty string (or just whitespace) was used as a username.
    #[error("username cannot be empty")]
    EmptyUsername,

    /// The password field was left empty.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// An operation that needs a logged-in user was attempted while logged out.
    #[error("no user is logged in")]
    NotLoggedIn,

    /// Tried to remove an expense that is not in today's list.
    #[error("there is no expense at position {0} in today's list")]
    RemoveMissingExpense(usize),

    /// The value stored under a key could not be decoded.
    ///
    /// Holds the key.
    #[error("the value stored under \"{0}\" could not be read")]
    UnreadableValue(String),

    /// The stored expenses of the named user could not be read, so they must
    /// not be overwritten.
    #[error("the stored expenses of {0} could not be read and will not be overwritten")]
    UnreadableExpenses(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while serializing a value as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
