//! The route handler for updating an existing expense.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId, UpdateExpense},
};

/// A route handler that overwrites the provided fields of an expense.
///
/// Responds with 404 if the ID is unknown, 400 if a supplied user is not
/// allowed, and 200 with the updated expense otherwise.
pub async fn update_expense_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
    Json(payload): Json<UpdateExpense>,
) -> Result<Json<Expense>, Error> {
    let expense = state.ledger()?.expenses.update(id, payload)?;

    Ok(Json(expense))
}
