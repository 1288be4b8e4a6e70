//! The expense state container
//!
//! [`ExpenseStore`] owns the current [`AppState`] and a [`StateStore`]
//! backend. Every mutation goes through [`ExpenseStore::dispatch`], which runs
//! the reducer and then writes the new snapshot through the backend.

use crate::error::{HousingError, HousingResult};
use crate::models::{category, AppState, Expense, ExpenseDraft, ExpenseId, Money};
use crate::storage::StateStore;

use super::action::Action;
use super::reducer::reduce;

/// Owned application state synchronized with a persistence backend
#[derive(Debug)]
pub struct ExpenseStore<S: StateStore> {
    state: AppState,
    backend: S,
}

impl<S: StateStore> ExpenseStore<S> {
    /// Load state from `backend`, falling back to defaults when nothing
    /// usable is stored, and write the resulting state back
    ///
    /// Fails without writing when the backend cannot be read at all.
    pub fn open(backend: S) -> HousingResult<Self> {
        let loaded = backend.load()?.unwrap_or_else(|| {
            tracing::debug!("Starting from default state");
            AppState::default()
        });

        let mut store = Self {
            state: AppState::default(),
            backend,
        };
        store.dispatch(Action::LoadState(loaded))?;
        Ok(store)
    }

    /// Apply `action` and persist the resulting state
    ///
    /// The in-memory state is updated even when the write fails.
    pub fn dispatch(&mut self, action: Action) -> HousingResult<()> {
        tracing::debug!(action = %action, "Dispatching");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        self.backend.save(&self.state)
    }

    // === Mutations ===

    /// Replace the annual allowance
    pub fn set_annual_allowance(&mut self, amount: Money) -> HousingResult<()> {
        self.dispatch(Action::SetAllowance(amount))
    }

    /// Store a new expense under a fresh id
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> HousingResult<Expense> {
        draft
            .validate()
            .map_err(|e| HousingError::Validation(e.to_string()))?;
        self.require_category(&draft.category)?;

        let expense = draft.into_expense(ExpenseId::new());
        self.dispatch(Action::AddExpense(expense.clone()))?;
        Ok(expense)
    }

    /// Replace the stored expense that has the same id
    ///
    /// An id that matches nothing is ignored.
    pub fn update_expense(&mut self, expense: Expense) -> HousingResult<()> {
        expense
            .validate()
            .map_err(|e| HousingError::Validation(e.to_string()))?;
        self.require_category(&expense.category)?;

        if self.state.expense(expense.id).is_none() {
            tracing::debug!(id = %expense.id, "Update names an unknown expense");
        }
        self.dispatch(Action::UpdateExpense(expense))
    }

    /// Remove an expense; an unknown id is ignored
    pub fn delete_expense(&mut self, id: ExpenseId) -> HousingResult<()> {
        if self.state.expense(id).is_none() {
            tracing::debug!(%id, "Delete names an unknown expense");
        }
        self.dispatch(Action::DeleteExpense(id))
    }

    /// Append a category name exactly as given
    pub fn add_category(&mut self, name: impl Into<String>) -> HousingResult<()> {
        self.dispatch(Action::AddCategory(name.into()))
    }

    /// Replace the entire state
    pub fn replace_state(&mut self, state: AppState) -> HousingResult<()> {
        self.dispatch(Action::LoadState(state))
    }

    fn require_category(&self, name: &str) -> HousingResult<()> {
        if category::contains(&self.state.categories, name) {
            Ok(())
        } else {
            Err(HousingError::category_not_found(name))
        }
    }

    // === Queries ===

    /// The current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn annual_allowance(&self) -> Money {
        self.state.annual_allowance
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[String] {
        &self.state.categories
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.state.total_expenses()
    }

    /// Allowance minus total expenses; may be negative
    pub fn remaining_allowance(&self) -> Money {
        self.state.remaining_allowance()
    }

    /// Find an expense by full id or short display id (`exp-1a2b3c4d`)
    pub fn find_expense(&self, identifier: &str) -> Option<&Expense> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.state.expense(id);
        }
        self.state
            .expenses
            .iter()
            .find(|e| e.id.matches_short(identifier))
    }

    /// The last `count` expenses added, newest first
    pub fn recent_expenses(&self, count: usize) -> Vec<&Expense> {
        self.state.expenses.iter().rev().take(count).collect()
    }

    /// Distinct categories that expenses actually use
    pub fn used_categories(&self) -> Vec<String> {
        category::used_categories(&self.state.expenses)
    }

    /// The persistence backend
    pub fn backend(&self) -> &S {
        &self.backend
    }
}
