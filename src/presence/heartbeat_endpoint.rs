//! The route handler for periodic client heartbeats.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, user::User};

/// A route handler that refreshes a user's last-seen timestamp.
///
/// Unknown identifiers are rejected with 400 and no state is touched.
pub async fn heartbeat_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, Error> {
    let user = user_id.parse::<User>()?;

    state.ledger()?.presence.heartbeat(user);

    Ok(Json(json!({ "success": true })).into_response())
}

#[cfg(test)]
mod heartbeat_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        presence::PresenceTracker,
    };

    use super::heartbeat_endpoint;

    fn new_test_server() -> (AppState, TestServer) {
        let state = AppState::new();
        let app = Router::new()
            .route(endpoints::HEARTBEAT, post(heartbeat_endpoint))
            .with_state(state.clone());

        let server = TestServer::new(app).expect("Could not create test server.");

        (state, server)
    }

    #[tokio::test]
    async fn heartbeat_updates_only_that_users_last_seen() {
        let (state, server) = new_test_server();

        let response = server
            .post(&format_endpoint(endpoints::HEARTBEAT, "eileen"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["success"], true);

        let ledger = state.ledger().unwrap();
        assert!(ledger.presence.eileen.last_seen.is_some());
        assert!(!ledger.presence.eileen.connected);
        assert!(ledger.presence.matt.last_seen.is_none());
    }

    #[tokio::test]
    async fn heartbeat_for_unknown_user_returns_400_without_mutating() {
        let (state, server) = new_test_server();

        let response = server
            .post(&format_endpoint(endpoints::HEARTBEAT, "bob"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(state.ledger().unwrap().presence, PresenceTracker::default());
    }
}
