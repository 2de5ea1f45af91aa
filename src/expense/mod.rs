//! The expense ledger: the core record type, its in-memory store, and the
//! CRUD route handlers.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod model;
mod store;
mod update_endpoint;

pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use list_endpoint::list_expenses_endpoint;
pub use model::{Expense, ExpenseId, NewExpense, NewTransaction, UpdateExpense};
pub use store::ExpenseStore;
pub use update_endpoint::update_expense_endpoint;
