//! Expense state management
//!
//! A reducer-style container: [`Action`]s describe transitions, [`reduce`]
//! applies them purely, and [`ExpenseStore`] owns the state and persists each
//! new snapshot.

pub mod action;
pub mod reducer;
pub mod store;

pub use action::Action;
pub use reducer::reduce;
pub use store::ExpenseStore;
