//! Application router configuration.

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use serde::Serialize;
use serde_json::{Value, json};
use time::OffsetDateTime;
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    csv_import::{MAX_CSV_UPLOAD_BYTES, upload_csv_endpoint},
    dataset::get_data_endpoint,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint,
        update_expense_endpoint,
    },
    presence::{connect_endpoint, heartbeat_endpoint},
    reset::reset_endpoint,
    transaction::{
        MAX_BULK_INSERT_BYTES, bulk_insert_endpoint, delete_transaction_endpoint,
        edit_category_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// CORS is wide open: the API serves a trusted two-person household, and the
/// browser frontend is hosted on another origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_root))
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            put(update_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(
            endpoints::UPLOAD_CSV,
            post(upload_csv_endpoint).layer(DefaultBodyLimit::max(MAX_CSV_UPLOAD_BYTES)),
        )
        .route(
            endpoints::TRANSACTIONS,
            post(bulk_insert_endpoint).layer(DefaultBodyLimit::max(MAX_BULK_INSERT_BYTES)),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_category_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::CONNECT, post(connect_endpoint))
        .route(endpoints::HEARTBEAT, post(heartbeat_endpoint))
        .route(endpoints::RESET, post(reset_endpoint))
        .route(endpoints::DATA, get(get_data_endpoint))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The root path '/' reports that the server is up and lists its endpoints.
async fn get_root() -> Json<Value> {
    Json(json!({
        "message": "💕 Matt and Eileen's Expense Tracker Server is running!",
        "endpoints": [
            "GET /api/expenses - Get all expenses",
            "POST /api/expenses - Add new expense",
            "PUT /api/expenses/{id} - Update expense",
            "DELETE /api/expenses/{id} - Delete expense",
            "POST /api/upload-csv - Upload CSV file",
            "GET /api/data - Get the full dataset",
            "POST /api/transactions - Bulk insert transactions",
            "PUT /api/transactions/{id} - Edit transaction category",
            "DELETE /api/transactions/{id} - Delete transaction",
            "POST /api/connect/{user_id} - Announce a client",
            "POST /api/heartbeat/{user_id} - Refresh last-seen",
            "POST /api/reset - Clear all data",
            "GET /health - Health check",
        ],
    }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

/// The liveness check.
async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: OffsetDateTime::now_utc(),
    })
}
