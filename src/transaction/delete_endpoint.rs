//! The route handler for deleting a transaction via the transactions API.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, expense::ExpenseId};

/// A route handler that removes a transaction and reports success.
///
/// Unlike [crate::expense::delete_expense_endpoint] this responds with a
/// `{success, message}` body rather than the removed record, for clients of
/// the transactions API surface.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
) -> Result<Response, Error> {
    state.ledger()?.expenses.delete(id)?;

    Ok(Json(json!({
        "success": true,
        "message": "Transaction deleted",
    }))
    .into_response())
}

#[cfg(test)]
mod delete_transaction_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::delete};
    use axum_test::TestServer;

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        expense::NewExpense,
    };

    use super::delete_transaction_endpoint;

    fn new_test_server() -> (AppState, TestServer) {
        let state = AppState::new();
        let app = Router::new()
            .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
            .with_state(state.clone());

        let server = TestServer::new(app).expect("Could not create test server.");

        (state, server)
    }

    #[tokio::test]
    async fn delete_reports_success_and_removes_transaction() {
        let (state, server) = new_test_server();

        let expense = state
            .ledger()
            .unwrap()
            .expenses
            .create(NewExpense {
                user: Some("Eileen".to_owned()),
                amount: Some(3.0),
                description: Some("Stamps".to_owned()),
                date: Some("2024-07-05".to_owned()),
                category: None,
            })
            .unwrap();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, expense.id))
            .await;

        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Transaction deleted");
        assert!(state.ledger().unwrap().expenses.all().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_404() {
        let (_, server) = new_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 404))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
