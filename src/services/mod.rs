//! Service layer
//!
//! Logic that sits beside the state container: list filtering and checking
//! imported documents.

pub mod filter;
pub mod import;

pub use filter::ExpenseFilter;
pub use import::{read_state_document, ImportSummary};
