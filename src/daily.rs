//! The daily tab: today's expenses, the form for adding one and the endpoints
//! for adding and removing expenses.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    charts::{ChartSurface, chart_container},
    endpoints,
    expense::ExpenseForm,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    panel::{chart_head_elements, expense_list, total_line},
    tabs::{Tab, tab_page},
    timezone::get_local_date,
    tracker::Tracker,
    view::{PanelView, project_daily},
};

/// The state needed for the daily tab and its endpoints.
#[derive(Debug, Clone)]
pub struct DailyState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DailyState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the daily tab.
pub async fn get_daily_page(State(state): State<DailyState>) -> Response {
    let today = match get_local_date(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

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

    let view = project_daily(tracker.user(), tracker.expenses(), today);

    daily_view(&view, tracker.user().is_some()).into_response()
}

/// Handle the form for adding an expense.
///
/// Invalid input, or adding while logged out, changes nothing. Either way the
/// client is sent back to the daily tab.
pub async fn create_expense_endpoint(
    State(state): State<DailyState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let today = match get_local_date(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let result = Tracker::load(&connection)
        .and_then(|mut tracker| tracker.add_expense(&form.name, &form.amount, today, &connection));

    match result {
        Ok(expense) => {
            tracing::debug!("Added expense {expense:?}");
        }
        Err(
            error @ (Error::NotLoggedIn | Error::EmptyExpenseName | Error::InvalidAmount(_)),
        ) => {
            tracing::info!("Ignoring expense form: {error}");
        }
        Err(error @ Error::UnreadableExpenses(_)) => {
            tracing::error!("Refusing to add an expense: {error}");
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while adding an expense: {error}");
            return error.into_response();
        }
    }

    redirect_to_daily_view()
}

/// Remove the expense at `index` in today's list.
///
/// An index outside today's list, or removing while logged out, changes nothing.
pub async fn delete_expense_endpoint(
    State(state): State<DailyState>,
    Path(index): Path<usize>,
) -> Response {
    let today = match get_local_date(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let result = Tracker::load(&connection)
        .and_then(|mut tracker| tracker.remove_today_expense(index, today, &connection));

    match result {
        Ok(expense) => {
            tracing::debug!("Removed expense {expense:?}");
        }
        Err(error @ (Error::NotLoggedIn | Error::RemoveMissingExpense(_))) => {
            tracing::warn!("Ignoring remove request: {error}");
        }
        Err(error @ Error::UnreadableExpenses(_)) => {
            tracing::error!("Refusing to remove an expense: {error}");
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while removing an expense: {error}");
            return error.into_response();
        }
    }

    redirect_to_daily_view()
}

fn redirect_to_daily_view() -> Response {
    (
        HxRedirect(endpoints::DAILY_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// The add form is only shown to a logged-in user.
fn daily_view(view: &PanelView, logged_in: bool) -> Markup {
    let content = html!(
        @if logged_in {
            (expense_form_view())
        }
        (expense_list("expense-list", &view.rows))
        (total_line("Total", "total-amount", &view.total))
        (chart_container(ChartSurface::Daily))
    );

    tab_page(
        Tab::Daily,
        &chart_head_elements(ChartSurface::Daily, view),
        content,
    )
}

fn expense_form_view() -> Markup {
    html!(
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            class="w-full mb-6 space-y-4"
        {
            div
            {
                label for="expense-name" class=(FORM_LABEL_STYLE) { "Expense" }

                input
                    id="expense-name"
                    type="text"
                    name="name"
                    placeholder="e.g. Coffee"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense-amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="expense-amount"
                    type="number"
                    name="amount"
                    placeholder="0.00"
                    min="0.01"
                    step="0.01"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
        }
    )
}
