//! Importing expenses from uploaded CSV statements with heuristic column
//! detection.

mod csv;
mod upload_endpoint;

pub use csv::{ImportedExpense, parse_expenses_csv};
pub use upload_endpoint::{MAX_CSV_UPLOAD_BYTES, upload_csv_endpoint};
