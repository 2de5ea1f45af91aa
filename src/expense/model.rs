//! This file defines the type `Expense`, the core record type of the
//! application, and the request shapes used to create and modify it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::user::User;

/// Alias for expense IDs.
///
/// IDs are assigned from a monotonic counter at insertion and are never
/// reused within a process run.
pub type ExpenseId = i64;

/// A single expense belonging to one of the two allowed users.
///
/// Expenses are created through [crate::expense::ExpenseStore] which assigns
/// the ID and creation timestamp. `updated_at` and `updated_by` are absent
/// until the record is first modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The unique ID of the expense.
    pub id: ExpenseId,
    /// The user the expense belongs to.
    pub user: User,
    /// The amount of money spent. Always non-negative once stored.
    pub amount: f64,
    /// A text description of what the expense was for.
    pub description: String,
    /// When the expense happened, kept as the text the client provided.
    ///
    /// No calendar validation is performed; bank exports disagree too much
    /// on date formats for that to be useful here.
    pub date: String,
    /// A free-form category, e.g. "Dining".
    pub category: String,
    /// When the expense was inserted into the ledger. Immutable.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the expense was last modified, if ever.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    /// Who last modified the expense, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<User>,
}

/// The request body for creating an expense.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as [crate::Error::MissingFields] rather than a generic
/// deserialization rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewExpense {
    /// The identifier of the user the expense belongs to.
    pub user: Option<String>,
    /// The amount of money spent.
    pub amount: Option<f64>,
    /// A text description of what the expense was for.
    pub description: Option<String>,
    /// When the expense happened.
    pub date: Option<String>,
    /// An optional category. Defaults to "Other" when absent or empty.
    pub category: Option<String>,
}

/// The request body for updating an expense.
///
/// Only provided, non-empty fields overwrite the stored record. A zero
/// amount is ignored rather than applied, matching the create-side rule that
/// a zero amount counts as absent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpense {
    /// A new owner for the expense.
    pub user: Option<String>,
    /// A new amount.
    pub amount: Option<f64>,
    /// A new description.
    pub description: Option<String>,
    /// A new date.
    pub date: Option<String>,
    /// A new category.
    pub category: Option<String>,
    /// Who is making the modification.
    pub updated_by: Option<String>,
}

/// One row of a bulk transaction insert (`POST /api/transactions`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewTransaction {
    /// The amount of money spent. Normalised to its absolute value.
    pub amount: Option<f64>,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// When the transaction happened.
    pub date: Option<String>,
    /// An optional category. Defaults to "Other" when absent or empty.
    pub category: Option<String>,
}
