//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/today/{index}', use [format_endpoint].

/// The root route which redirects to the daily tab.
pub const ROOT: &str = "/";
/// The tab for adding and viewing today's expenses.
pub const DAILY_VIEW: &str = "/daily";
/// The tab for viewing this month's expenses.
pub const MONTHLY_VIEW: &str = "/monthly";
/// The tab for logging in and out.
pub const PROFILE_VIEW: &str = "/profile";

/// The route for adding an expense for today.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route for removing one of today's expenses by its position in the daily list.
pub const DELETE_TODAY_EXPENSE: &str = "/api/expenses/today/{index}";
/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/today/{index}', '{index}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: usize) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
