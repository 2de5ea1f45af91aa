//! The transactions API surface: bulk inserts, recategorisation and
//! deletion over the shared expense ledger.

mod bulk_insert_endpoint;
mod delete_endpoint;
mod edit_category_endpoint;

pub use bulk_insert_endpoint::{MAX_BULK_INSERT_BYTES, bulk_insert_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_category_endpoint::edit_category_endpoint;
