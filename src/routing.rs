//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    daily::{create_expense_endpoint, delete_expense_endpoint, get_daily_page},
    endpoints,
    monthly::get_monthly_page,
    not_found::get_404_not_found,
    profile::{get_log_out, get_profile_page, post_log_in},
    tabs::Tab,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DAILY_VIEW, get(get_daily_page))
        .route(endpoints::MONTHLY_VIEW, get(get_monthly_page))
        .route(endpoints::PROFILE_VIEW, get(get_profile_page))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(
            endpoints::DELETE_TODAY_EXPENSE,
            delete(delete_expense_endpoint),
        )
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the default tab.
async fn get_index_page() -> Redirect {
    Redirect::to(Tab::default().endpoint())
}
