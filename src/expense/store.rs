//! The in-memory expense store.
//!
//! The store is an ordered collection plus a monotonic ID counter, owned by
//! [crate::AppState] and handed to route handlers by reference. There is no
//! persistence: the ledger lives and dies with the process.

use time::OffsetDateTime;

use crate::{
    Error,
    csv_import::ImportedExpense,
    expense::{Expense, ExpenseId, NewExpense, NewTransaction, UpdateExpense},
    user::User,
};

/// Stores expenses in insertion order and assigns their IDs.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }
}

impl ExpenseStore {
    /// Every expense in the ledger, in insertion order.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Create a new expense from a manual entry.
    ///
    /// The category defaults to "Other" when absent or empty.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingFields] if `user`, `amount`, `description` or `date`
    ///   is absent or empty (a zero amount counts as absent),
    /// - [Error::InvalidUser] if `user` is not one of the allowed users,
    /// - or [Error::NegativeAmount] if `amount` is negative.
    pub fn create(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        let user = non_empty(new_expense.user).ok_or(Error::MissingFields)?;
        let amount = new_expense
            .amount
            .filter(|amount| *amount != 0.0)
            .ok_or(Error::MissingFields)?;
        let description = non_empty(new_expense.description).ok_or(Error::MissingFields)?;
        let date = non_empty(new_expense.date).ok_or(Error::MissingFields)?;

        let user = user.parse::<User>()?;

        if amount < 0.0 {
            return Err(Error::NegativeAmount);
        }

        let expense = Expense {
            id: self.next_id(),
            user,
            amount,
            description,
            date,
            category: non_empty(new_expense.category).unwrap_or_else(|| "Other".to_owned()),
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
            updated_by: None,
        };

        self.expenses.push(expense.clone());

        Ok(expense)
    }

    /// Overwrite the provided, non-empty fields of an existing expense.
    ///
    /// A zero amount is ignored rather than applied. `updated_at` is stamped
    /// on every successful update, and `updated_by` is recorded when
    /// supplied. Validation happens before any field is written, so a failed
    /// update leaves the record untouched.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::ExpenseNotFound] if `id` does not refer to a stored expense,
    /// - [Error::InvalidUser] if `user` or `updated_by` is not one of the
    ///   allowed users,
    /// - or [Error::NegativeAmount] if `amount` is negative.
    pub fn update(&mut self, id: ExpenseId, update: UpdateExpense) -> Result<Expense, Error> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(Error::ExpenseNotFound)?;

        let user = non_empty(update.user)
            .map(|name| name.parse::<User>())
            .transpose()?;
        let updated_by = non_empty(update.updated_by)
            .map(|name| name.parse::<User>())
            .transpose()?;
        let amount = update.amount.filter(|amount| *amount != 0.0);

        if amount.is_some_and(|amount| amount < 0.0) {
            return Err(Error::NegativeAmount);
        }

        let expense = &mut self.expenses[index];

        if let Some(user) = user {
            expense.user = user;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(description) = non_empty(update.description) {
            expense.description = description;
        }
        if let Some(date) = non_empty(update.date) {
            expense.date = date;
        }
        if let Some(category) = non_empty(update.category) {
            expense.category = category;
        }

        expense.updated_at = Some(OffsetDateTime::now_utc());
        if updated_by.is_some() {
            expense.updated_by = updated_by;
        }

        Ok(expense.clone())
    }

    /// Remove an expense from the ledger and return it.
    ///
    /// # Errors
    /// This function will return an [Error::ExpenseNotFound] if `id` does
    /// not refer to a stored expense.
    pub fn delete(&mut self, id: ExpenseId) -> Result<Expense, Error> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(Error::ExpenseNotFound)?;

        Ok(self.expenses.remove(index))
    }

    /// Append the output of the CSV importer, stamping IDs and creation
    /// timestamps.
    ///
    /// Returns the inserted batch for reporting.
    pub fn insert_imported(&mut self, rows: Vec<ImportedExpense>) -> Vec<Expense> {
        let inserted: Vec<Expense> = rows
            .into_iter()
            .map(|row| Expense {
                id: self.next_id(),
                user: row.user,
                amount: row.amount,
                description: row.description,
                date: row.date,
                category: row.category,
                created_at: OffsetDateTime::now_utc(),
                updated_at: None,
                updated_by: None,
            })
            .collect();

        self.expenses.extend(inserted.iter().cloned());

        inserted
    }

    /// Append a bulk JSON insert in input order, all rows stamped with
    /// `user` and an insertion timestamp.
    ///
    /// Amounts are normalised to their absolute value. No deduplication is
    /// performed. All rows are validated before any row is appended, so a
    /// failed insert leaves the ledger untouched.
    ///
    /// # Errors
    /// This function will return an [Error::MissingFields] if any row lacks
    /// `amount`, `description` or `date`.
    pub fn insert_batch(
        &mut self,
        user: User,
        rows: Vec<NewTransaction>,
    ) -> Result<Vec<Expense>, Error> {
        let mut validated = Vec::with_capacity(rows.len());

        for row in rows {
            let amount = row.amount.ok_or(Error::MissingFields)?;
            let description = non_empty(row.description).ok_or(Error::MissingFields)?;
            let date = non_empty(row.date).ok_or(Error::MissingFields)?;
            let category = non_empty(row.category).unwrap_or_else(|| "Other".to_owned());

            validated.push((amount.abs(), description, date, category));
        }

        let inserted: Vec<Expense> = validated
            .into_iter()
            .map(|(amount, description, date, category)| Expense {
                id: self.next_id(),
                user,
                amount,
                description,
                date,
                category,
                created_at: OffsetDateTime::now_utc(),
                updated_at: None,
                updated_by: None,
            })
            .collect();

        self.expenses.extend(inserted.iter().cloned());

        Ok(inserted)
    }

    /// Remove every expense. The ID counter is not rewound, so IDs are never
    /// reused within a process run.
    pub fn reset(&mut self) {
        self.expenses.clear();
    }

    fn next_id(&mut self) -> ExpenseId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
