//! The route handler that returns the process to its initial state.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error};

/// A route handler that clears every transaction and restores both
/// presence entries to their defaults, without restarting the process.
///
/// The expense ID counter is not rewound: IDs are never reused within a
/// process run.
pub async fn reset_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    state.ledger()?.reset();

    tracing::info!("All data has been reset");

    Ok(Json(json!({
        "success": true,
        "message": "All data has been reset",
    }))
    .into_response())
}
