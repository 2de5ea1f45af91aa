//! Heuristic parsing of uploaded CSV data into candidate expenses.
//!
//! Bank and card exports disagree on column names, so instead of a fixed
//! schema the parser guesses column roles by case-insensitive substring
//! matching on the header row. Rows that do not yield an amount, a
//! description and a date are silently dropped; a bad row should never fail
//! a whole statement import.

use crate::user::User;

/// A candidate expense extracted from one CSV data row.
///
/// IDs and creation timestamps are assigned when the batch is handed to
/// [crate::expense::ExpenseStore::insert_imported].
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedExpense {
    /// The user the upload was made for.
    pub user: User,
    /// The amount from the amount column, normalised to its absolute value.
    pub amount: f64,
    /// The value of the description column.
    pub description: String,
    /// The value of the date column, kept as text.
    pub date: String,
    /// The value of the category column, or "Imported" if the statement has
    /// no usable category column.
    pub category: String,
}

/// The column index inferred for each semantic role.
///
/// Roles are assigned in a left-to-right scan of the header row; when two
/// headers match the same role, the later column wins. A single header cell
/// may satisfy more than one role (e.g. "Tran Type" is a category column
/// because it contains "type").
#[derive(Debug, Default, PartialEq)]
struct ColumnRoles {
    amount: Option<usize>,
    description: Option<usize>,
    date: Option<usize>,
    category: Option<usize>,
}

fn infer_column_roles(headers: &[String]) -> ColumnRoles {
    let mut roles = ColumnRoles::default();

    for (index, header) in headers.iter().enumerate() {
        let header = header.to_lowercase();

        if header.contains("amount") || header.contains("debit") || header.contains("withdrawal") {
            roles.amount = Some(index);
        }
        if header.contains("description") || header.contains("merchant") || header.contains("payee")
        {
            roles.description = Some(index);
        }
        if header.contains("date") {
            roles.date = Some(index);
        }
        if header.contains("category") || header.contains("type") {
            roles.category = Some(index);
        }
    }

    roles
}

/// Split one CSV line on commas, trimming whitespace and stripping every
/// double-quote character from each field.
///
/// This is deliberately not a conforming CSV reader: quoting edge cases,
/// embedded delimiters and multi-line fields are out of scope for the
/// statement exports this tool consumes.
fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|field| field.trim().replace('"', ""))
        .collect()
}

/// Parse raw CSV text into candidate expenses for `user`.
///
/// The first non-empty line is the header row and is used to infer column
/// roles. Each remaining line becomes a candidate row:
///
/// - rows with fewer fields than the header are skipped,
/// - an amount that does not parse as a finite number counts as zero,
/// - rows whose amount is zero or whose description or date is empty are
///   dropped without diagnostics,
/// - amounts are normalised to their absolute value, and the category
///   defaults to "Imported" when the column is missing or the cell empty.
///
/// Returns the candidate expenses in row order; an input without any
/// non-empty lines yields an empty vector.
pub fn parse_expenses_csv(text: &str, user: User) -> Vec<ImportedExpense> {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(header_line) => split_row(header_line),
        None => return Vec::new(),
    };
    let roles = infer_column_roles(&headers);

    let mut expenses = Vec::new();

    for line in lines {
        let values = split_row(line);

        if values.len() < headers.len() {
            continue;
        }

        let amount = roles
            .amount
            .and_then(|index| values[index].trim().parse::<f64>().ok())
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0);
        let description = roles
            .description
            .map(|index| values[index].clone())
            .unwrap_or_default();
        let date = roles
            .date
            .map(|index| values[index].clone())
            .unwrap_or_default();
        let category = match roles.category {
            Some(index) if !values[index].is_empty() => values[index].clone(),
            _ => "Imported".to_owned(),
        };

        if amount == 0.0 || description.is_empty() || date.is_empty() {
            continue;
        }

        expenses.push(ImportedExpense {
            user,
            amount: amount.abs(),
            description,
            date,
            category,
        });
    }

    expenses
}
