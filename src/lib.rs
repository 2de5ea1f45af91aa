//! A small expense-tracking backend for a two-person household.
//!
//! This library provides a JSON REST API over an in-memory ledger: expense
//! CRUD, bulk transaction inserts, CSV imports with heuristic column
//! detection, and per-user presence tracking.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod csv_import;
mod dataset;
mod endpoints;
mod expense;
mod logging;
mod presence;
mod reset;
mod routing;
mod transaction;
mod user;

pub use app_state::{AppState, Ledger};
pub use logging::logging_middleware;
pub use routing::build_router;
pub use user::User;

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
    /// A create request was missing one or more of the required fields
    /// (`user`, `amount`, `description`, `date`).
    ///
    /// A zero amount counts as missing: the original system treated falsy
    /// amounts as absent, so a zero-amount expense is not recordable.
    #[error("Missing required fields")]
    MissingFields,

    /// The user identifier was not one of the two allowed users.
    #[error("Invalid user. Only Matt and Eileen are allowed.")]
    InvalidUser,

    /// A negative amount was supplied for a manual create or update.
    ///
    /// Stored amounts are always non-negative. CSV imports and bulk inserts
    /// normalise amounts to their absolute value instead of rejecting them.
    #[error("Amount must not be negative")]
    NegativeAmount,

    /// The requested expense does not exist in the ledger.
    ///
    /// The client should check that the ID is correct and that the expense
    /// has not already been deleted.
    #[error("Expense not found")]
    ExpenseNotFound,

    /// A CSV upload request did not include a file field.
    #[error("No file uploaded")]
    NoFile,

    /// The multipart form could not be read as a file upload.
    #[error("Could not parse multipart form: {0}")]
    Multipart(String),

    /// The application state lock could not be acquired.
    ///
    /// This only happens if a previous request panicked while holding the
    /// lock.
    #[error("could not acquire the application state lock")]
    StateLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::MissingFields
            | Error::InvalidUser
            | Error::NegativeAmount
            | Error::NoFile
            | Error::Multipart(_) => StatusCode::BAD_REQUEST,
            Error::ExpenseNotFound => StatusCode::NOT_FOUND,
            Error::StateLock => {
                tracing::error!("An unexpected error occurred: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
