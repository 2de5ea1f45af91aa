//! The route handler for a client announcing itself.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, dataset::Dataset, user::User};

/// A route handler that marks a user as connected.
///
/// Responds with 400 for identifiers outside the two-user allowlist,
/// leaving presence state untouched. On success returns the full dataset
/// snapshot and a greeting, so a freshly connected client can render
/// without a second request.
pub async fn connect_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, Error> {
    let user = user_id.parse::<User>()?;

    let mut ledger = state.ledger()?;
    ledger.presence.connect(user);

    tracing::info!("{user} connected");

    Ok(Json(json!({
        "user": user,
        "data": Dataset::snapshot(&ledger),
        "message": format!("Welcome, {user}! 💕"),
    }))
    .into_response())
}
