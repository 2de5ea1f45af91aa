//! The route handler for listing every expense in the ledger.

use axum::{Json, extract::State};

use crate::{AppState, Error, expense::Expense};

/// A route handler that returns all expenses in insertion order.
///
/// There is no pagination or filtering: the ledger belongs to two people.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let expenses = state.ledger()?.expenses.all().to_vec();

    Ok(Json(expenses))
}
