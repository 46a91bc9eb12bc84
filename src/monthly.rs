//! The monthly tab: every expense in the current month and a chart grouped by name.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    aggregation::YearMonth,
    charts::{ChartSurface, chart_container},
    panel::{chart_head_elements, expense_list, total_line},
    tabs::{Tab, tab_page},
    timezone::get_local_date,
    tracker::Tracker,
    view::{PanelView, project_monthly},
};

/// The state needed for the monthly tab.
#[derive(Debug, Clone)]
pub struct MonthlyState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MonthlyState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the monthly tab for the month containing today.
pub async fn get_monthly_page(State(state): State<MonthlyState>) -> Response {
    let month = match get_local_date(&state.local_timezone) {
        Ok(today) => YearMonth::of(today),
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

    let view = project_monthly(tracker.user(), tracker.expenses(), month);

    monthly_view(month, &view).into_response()
}

fn monthly_view(month: YearMonth, view: &PanelView) -> Markup {
    let content = html!(
        h2 class="w-full mb-4 text-xl font-bold" { "Expenses for " (month) }
        (expense_list("monthly-list", &view.rows))
        (total_line("Monthly Total", "monthly-total", &view.total))
        (chart_container(ChartSurface::Monthly))
    );

    tab_page(
        Tab::Monthly,
        &chart_head_elements(ChartSurface::Monthly, view),
        content,
    )
}
