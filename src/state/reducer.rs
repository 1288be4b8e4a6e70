//! The pure state reducer

use crate::models::AppState;

use super::action::Action;

/// Apply `action` to `state`, producing the next state
///
/// Never fails and has no side effects. Updates and deletes naming an id
/// that isn't present leave the expense list untouched.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetAllowance(amount) => {
            state.annual_allowance = amount;
            state
        }
        Action::AddExpense(expense) => {
            state.expenses.push(expense);
            state
        }
        Action::UpdateExpense(expense) => {
            if let Some(slot) = state.expenses.iter_mut().find(|e| e.id == expense.id) {
                *slot = expense;
            }
            state
        }
        Action::DeleteExpense(id) => {
            state.expenses.retain(|e| e.id != id);
            state
        }
        Action::AddCategory(name) => {
            state.categories.push(name);
            state
        }
        Action::LoadState(loaded) => loaded,
    }
}
