//! Implements the state shared by every route handler.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, expense::ExpenseStore, presence::PresenceTracker};

/// The whole of the application's data: the expense store and the presence
/// tracker.
///
/// There is deliberately no persistence layer. The original system kept its
/// records in process memory, and this port preserves that: the ledger is
/// created empty at startup and lives for the process's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// The ordered collection of expenses.
    pub expenses: ExpenseStore,
    /// Connected/last-seen state for the two users.
    pub presence: PresenceTracker,
}

impl Ledger {
    /// Clear all transactions and restore presence defaults, as one
    /// operation so clients never observe a half-reset ledger.
    pub fn reset(&mut self) {
        self.expenses.reset();
        self.presence.reset();
    }
}

/// The state of the JSON API server.
///
/// Cloning is cheap: clones share the same underlying ledger. Handlers run
/// on a multithreaded runtime, so the ledger sits behind a single mutex to
/// preserve the serial-mutation semantics the original relied on from its
/// single-threaded runtime.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the ledger for the duration of one handler's read or mutation.
    ///
    /// # Errors
    /// Returns an [Error::StateLock] if the lock is poisoned, which only
    /// happens if a previous request panicked while holding it.
    pub fn ledger(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.ledger.lock().map_err(|error| {
            tracing::error!("could not acquire the application state lock: {error}");
            Error::StateLock
        })
    }
}

#[cfg(test)]
mod app_state_tests {
    use crate::expense::NewExpense;

    use super::AppState;

    #[test]
    fn clones_share_the_same_ledger() {
        let state = AppState::new();
        let clone = state.clone();

        clone
            .ledger()
            .unwrap()
            .expenses
            .create(NewExpense {
                user: Some("Matt".to_owned()),
                amount: Some(2.0),
                description: Some("Shared state".to_owned()),
                date: Some("2024-07-07".to_owned()),
                category: None,
            })
            .unwrap();

        assert_eq!(state.ledger().unwrap().expenses.all().len(), 1);
    }

    #[test]
    fn fresh_states_are_isolated_from_each_other() {
        let first = AppState::new();
        let second = AppState::new();

        first
            .ledger()
            .unwrap()
            .expenses
            .create(NewExpense {
                user: Some("Eileen".to_owned()),
                amount: Some(2.0),
                description: Some("Isolated state".to_owned()),
                date: Some("2024-07-07".to_owned()),
                category: None,
            })
            .unwrap();

        assert!(second.ledger().unwrap().expenses.all().is_empty());
    }
}
