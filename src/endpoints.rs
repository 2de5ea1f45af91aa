//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{id}', use
//! [format_endpoint].

use std::fmt::Display;

/// The root route, which reports the server banner and endpoint listing.
pub const ROOT: &str = "/";
/// The route for the liveness check.
pub const HEALTH: &str = "/health";
/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to update or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{id}";
/// The route to import expenses from an uploaded CSV file.
pub const UPLOAD_CSV: &str = "/api/upload-csv";
/// The route to bulk-insert transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to recategorise or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{id}";
/// The route for a client to announce itself.
pub const CONNECT: &str = "/api/connect/{user_id}";
/// The route for periodic client heartbeats.
pub const HEARTBEAT: &str = "/api/heartbeat/{user_id}";
/// The route to clear all transactions and presence state.
pub const RESET: &str = "/api/reset";
/// The route to fetch the full dataset snapshot.
pub const DATA: &str = "/api/data";

/// Replace the parameter in `endpoint_path` with `param`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{id}', '{id}' is the
/// parameter.
///
/// This function assumes that an endpoint path only contains ASCII
/// characters and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, param: impl Display) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        param,
        &endpoint_path[param_end..]
    )
}
