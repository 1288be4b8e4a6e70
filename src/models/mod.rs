//! Core data models
//!
//! This module contains the data structures of the housing allowance domain:
//! expenses, their attachments, categories, and the aggregate state.

pub mod attachment;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod state;

pub use attachment::{mime_type_for, Attachment};
pub use category::{default_categories, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use state::AppState;
