//! The route handler for creating an expense from a manual entry.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, expense::NewExpense};

/// A route handler for creating a single expense.
///
/// Responds with 201 and the created expense on success, or 400 with an
/// error body if required fields are missing or the user is not allowed.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<NewExpense>,
) -> Result<Response, Error> {
    let expense = state.ledger()?.expenses.create(payload)?;

    Ok((StatusCode::CREATED, Json(expense)).into_response())
}

#[cfg(test)]
mod create_expense_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{AppState, endpoints, expense::Expense};

    use super::create_expense_endpoint;

    fn new_test_server() -> (AppState, TestServer) {
        let state = AppState::new();
        let app = Router::new()
            .route(endpoints::EXPENSES, post(create_expense_endpoint))
            .with_state(state.clone());

        let server = TestServer::new(app).expect("Could not create test server.");

        (state, server)
    }

    #[tokio::test]
    async fn create_returns_201_with_created_expense() {
        let (state, server) = new_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "user": "Matt",
                "amount": 12.5,
                "description": "Coffee Shop",
                "date": "2024-01-05",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let expense: Expense = response.json();
        assert_eq!(expense.id, 1);
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category, "Other");
        assert_eq!(state.ledger().unwrap().expenses.all().len(), 1);
    }

    #[tokio::test]
    async fn create_with_missing_fields_returns_400() {
        let (state, server) = new_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({ "user": "Matt", "amount": 12.5 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Missing required fields");
        assert!(state.ledger().unwrap().expenses.all().is_empty());
    }

    #[tokio::test]
    async fn create_with_unknown_user_returns_400_without_mutating() {
        let (state, server) = new_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "user": "bob",
                "amount": 12.5,
                "description": "Coffee Shop",
                "date": "2024-01-05",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Invalid user. Only Matt and Eileen are allowed.");
        assert!(state.ledger().unwrap().expenses.all().is_empty());
    }
}
