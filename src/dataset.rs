//! The full-state snapshot returned to clients that want everything at
//! once.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, Ledger, expense::Expense, presence::PresenceTracker};

/// Everything a client needs to render: both presence entries and every
/// transaction in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Presence entries keyed by lowercase user identifier.
    pub users: PresenceTracker,
    /// Every expense in the ledger.
    pub transactions: Vec<Expense>,
}

impl Dataset {
    /// Copy the current ledger contents into a snapshot.
    pub fn snapshot(ledger: &Ledger) -> Self {
        Self {
            users: ledger.presence.clone(),
            transactions: ledger.expenses.all().to_vec(),
        }
    }
}

/// A route handler that returns the full dataset snapshot.
pub async fn get_data_endpoint(State(state): State<AppState>) -> Result<Json<Dataset>, Error> {
    let snapshot = Dataset::snapshot(&state.ledger()?);

    Ok(Json(snapshot))
}
