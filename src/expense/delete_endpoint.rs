//! The route handler for deleting an expense.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId},
};

/// A route handler that removes an expense and returns the removed record.
///
/// Responds with 404 if the ID is unknown.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
) -> Result<Json<Expense>, Error> {
    let expense = state.ledger()?.expenses.delete(id)?;

    Ok(Json(expense))
}
