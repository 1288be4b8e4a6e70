//! State transitions
//!
//! Every change to [`AppState`] is described by one [`Action`] and applied by
//! [`reduce`](super::reduce).

use std::fmt;

use crate::models::{AppState, Expense, ExpenseId, Money};

/// A single state transition with its payload
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the annual allowance
    SetAllowance(Money),
    /// Append an expense (its id is already assigned)
    AddExpense(Expense),
    /// Replace the expense with the same id
    UpdateExpense(Expense),
    /// Remove the expense with this id
    DeleteExpense(ExpenseId),
    /// Append a category name verbatim
    AddCategory(String),
    /// Replace the whole state
    LoadState(AppState),
}

impl Action {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetAllowance(_) => "SET_ALLOWANCE",
            Self::AddExpense(_) => "ADD_EXPENSE",
            Self::UpdateExpense(_) => "UPDATE_EXPENSE",
            Self::DeleteExpense(_) => "DELETE_EXPENSE",
            Self::AddCategory(_) => "ADD_CATEGORY",
            Self::LoadState(_) => "LOAD_STATE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetAllowance(amount) => write!(f, "{} {}", self.kind(), amount),
            Self::AddExpense(e) | Self::UpdateExpense(e) => write!(f, "{} {}", self.kind(), e.id),
            Self::DeleteExpense(id) => write!(f, "{} {}", self.kind(), id),
            Self::AddCategory(name) => write!(f, "{} {:?}", self.kind(), name),
            Self::LoadState(state) => {
                write!(f, "{} ({} expenses)", self.kind(), state.expenses.len())
            }
        }
    }
}
