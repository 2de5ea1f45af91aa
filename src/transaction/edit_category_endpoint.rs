//! The route handler for recategorising a transaction.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId, UpdateExpense},
};

/// The request body for editing a transaction's category.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCategory {
    /// The new category.
    pub category: Option<String>,
    /// Who is making the change.
    pub updated_by: Option<String>,
}

/// A route handler that changes a transaction's category and records who
/// changed it.
///
/// Responds with 404 if the ID is unknown and 200 with the updated
/// transaction otherwise.
pub async fn edit_category_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
    Json(payload): Json<EditCategory>,
) -> Result<Json<Expense>, Error> {
    let update = UpdateExpense {
        category: payload.category,
        updated_by: payload.updated_by,
        ..Default::default()
    };

    let expense = state.ledger()?.expenses.update(id, update)?;

    Ok(Json(expense))
}

#[cfg(test)]
mod edit_category_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::put};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        expense::{Expense, NewExpense},
        user::User,
    };

    use super::edit_category_endpoint;

    fn new_test_server_with_expense() -> (AppState, TestServer, Expense) {
        let state = AppState::new();
        let app = Router::new()
            .route(endpoints::TRANSACTION, put(edit_category_endpoint))
            .with_state(state.clone());

        let server = TestServer::new(app).expect("Could not create test server.");

        let expense = state
            .ledger()
            .unwrap()
            .expenses
            .create(NewExpense {
                user: Some("Matt".to_owned()),
                amount: Some(25.0),
                description: Some("Hardware store".to_owned()),
                date: Some("2024-07-04".to_owned()),
                category: None,
            })
            .unwrap();

        (state, server, expense)
    }

    #[tokio::test]
    async fn edit_category_updates_category_and_records_editor() {
        let (_, server, expense) = new_test_server_with_expense();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, expense.id))
            .json(&json!({ "category": "DIY", "updatedBy": "eileen" }))
            .await;

        response.assert_status_ok();

        let updated: Expense = response.json();
        assert_eq!(updated.category, "DIY");
        assert_eq!(updated.updated_by, Some(User::Eileen));
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.amount, expense.amount);
    }

    #[tokio::test]
    async fn edit_category_unknown_id_returns_404() {
        let (_, server, expense) = new_test_server_with_expense();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, expense.id + 1))
            .json(&json!({ "category": "DIY" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
