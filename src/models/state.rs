//! Application state aggregate
//!
//! `AppState` is the whole persisted document: the annual allowance, the
//! expense list, and the category list.

use serde::{Deserialize, Serialize};

use super::category::default_categories;
use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// Everything the tracker knows
///
/// Fields missing from a stored document fall back to their defaults, so a
/// document holding only `annualAllowance` still yields the seeded categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    /// The designated annual housing allowance
    pub annual_allowance: Money,

    /// Expenses in insertion order
    pub expenses: Vec<Expense>,

    /// Categories in insertion order (duplicates allowed)
    pub categories: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            annual_allowance: Money::zero(),
            expenses: Vec::new(),
            categories: default_categories(),
        }
    }
}

impl AppState {
    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Allowance minus total expenses; negative when overspent
    pub fn remaining_allowance(&self) -> Money {
        self.annual_allowance - self.total_expenses()
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }
}
