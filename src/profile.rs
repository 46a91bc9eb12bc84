//! The profile tab and the log-in and log-out endpoints.
//!
//! There are no accounts: any non-empty username and password logs in, and
//! each username gets its own list of expenses.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    session::Identity,
    tabs::{Tab, tab_page},
    tracker::Tracker,
};

/// The state needed for the profile tab and the log-in endpoints.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ProfileState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The data entered in the log-in form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogInForm {
    pub username: String,
    pub password: String,
}

/// Render the profile tab: a greeting when logged in, otherwise the log-in form.
pub async fn get_profile_page(State(state): State<ProfileState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let tracker = match Tracker::load(&connection) {
        Ok(tracker) => tracker,
        Err(error) => return error.into_response(),
    };

    profile_view(tracker.user()).into_response()
}

/// Handle the log-in form.
///
/// An empty username or password changes nothing. Either way the client is
/// sent back to the profile tab.
pub async fn post_log_in(
    State(state): State<ProfileState>,
    Form(form): Form<LogInForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let result = Tracker::load(&connection)
        .and_then(|mut tracker| tracker.log_in(&form.username, &form.password, &connection));

    match result {
        Ok(()) => {}
        Err(error @ (Error::EmptyUsername | Error::EmptyPassword)) => {
            tracing::info!("Ignoring log in form: {error}");
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while logging in: {error}");
            return error.into_response();
        }
    }

    (
        HxRedirect(endpoints::PROFILE_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// Log out the current user and go back to the profile tab.
pub async fn get_log_out(State(state): State<ProfileState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let result = Tracker::load(&connection).and_then(|mut tracker| tracker.log_out(&connection));

    if let Err(error) = result {
        tracing::error!("An unexpected error occurred while logging out: {error}");
        return error.into_response();
    }

    Redirect::to(endpoints::PROFILE_VIEW).into_response()
}

fn profile_view(user: Option<&Identity>) -> Markup {
    let content = html!(
        div id="profile-area" class="w-full p-6 bg-white rounded-2xl shadow dark:bg-gray-800"
        {
            @match user {
                Some(identity) => { (greeting_view(identity)) }
                None => { (log_in_form_view()) }
            }
        }
    );

    tab_page(Tab::Profile, &[], content)
}

fn greeting_view(identity: &Identity) -> Markup {
    html!(
        div class="text-center"
        {
            div class="text-5xl" { "👤" }

            p class="my-2 text-xl"
            {
                "Hello, " b { (identity.username) } "!"
            }

            a
                id="logout-btn"
                href=(endpoints::LOG_OUT)
                class="inline-block px-5 py-2 text-white bg-red-600 rounded-xl hover:bg-red-500"
            {
                "Log Out"
            }
        }
    )
}

fn log_in_form_view() -> Markup {
    html!(
        form
            id="login-form"
            hx-post=(endpoints::LOG_IN_API)
            class="flex flex-col gap-4"
        {
            div
            {
                label for="login-username" class=(FORM_LABEL_STYLE) { "Username" }

                input
                    id="login-username"
                    type="text"
                    name="username"
                    placeholder="Username"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="login-password" class=(FORM_LABEL_STYLE) { "Password" }

                input
                    id="login-password"
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Log In" }
        }

        p class="mt-3 text-sm text-center text-gray-500"
        {
            "(Demo: any username & password will work)"
        }
    )
}
