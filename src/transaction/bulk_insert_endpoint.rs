//! The route handler for inserting a batch of transactions in one request.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, Error, expense::NewTransaction, user::User};

/// The largest bulk-insert JSON body accepted, in bytes. Requests beyond
/// this are rejected before the handler runs.
pub const MAX_BULK_INSERT_BYTES: usize = 50 * 1024 * 1024;

/// The request body for a bulk transaction insert.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsert {
    /// The identifier of the user the batch belongs to.
    pub user_id: Option<String>,
    /// The transactions to append, in input order.
    #[serde(default)]
    pub transactions: Vec<NewTransaction>,
}

/// A route handler that appends a batch of transactions for one user.
///
/// Every row is stamped with the caller's user and an insertion timestamp;
/// amounts are normalised to their absolute value. No deduplication is
/// performed and input order is preserved.
pub async fn bulk_insert_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<BulkInsert>,
) -> Result<Response, Error> {
    let user = payload.user_id.unwrap_or_default().parse::<User>()?;

    let inserted = state
        .ledger()?
        .expenses
        .insert_batch(user, payload.transactions)?;

    Ok(Json(json!({
        "message": format!("Successfully saved {} transactions", inserted.len()),
        "transactions": inserted,
    }))
    .into_response())
}
