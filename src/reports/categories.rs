//! Category Breakdown
//!
//! Spending per category with each category's share of the total.

use std::collections::HashMap;

use crate::models::{AppState, Money};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of all spending
    pub percentage: f64,
}

/// Spending grouped by category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Categories with at least one expense, largest total first
    pub rows: Vec<CategorySpending>,
    pub total: Money,
    pub expense_count: usize,
}

impl CategoryBreakdown {
    /// Group every expense in `state` by its category
    pub fn generate(state: &AppState) -> Self {
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        for expense in &state.expenses {
            let entry = by_category
                .entry(expense.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total = state.total_expenses();
        let mut rows: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (amount, count))| CategorySpending {
                category: category.to_string(),
                total: amount,
                count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();

        // Largest first, then by name so output is stable
        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Self {
            rows,
            total,
            expense_count: state.expenses.len(),
        }
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(66));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>16} {:>8} {:>10}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(66));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>16} {:>8} {:>9.1}%\n",
                row.category,
                row.total.format_with_symbol(currency_symbol),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(66));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16} {:>8}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol),
            self.expense_count
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId};
    use chrono::NaiveDate;

    fn add(state: &mut AppState, category: &str, dollars: i64) {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        state.expenses.push(
            ExpenseDraft::new("Item", Money::from_dollars(dollars), category, date)
                .into_expense(ExpenseId::new()),
        );
    }

    #[test]
    fn test_groups_and_orders_by_total() {
        let mut state = AppState::default();
        add(&mut state, "Utilities", 100);
        add(&mut state, "Mortgage/Rent", 600);
        add(&mut state, "Utilities", 200);
        add(&mut state, "Lawn Care", 100);

        let report = CategoryBreakdown::generate(&state);

        let names: Vec<_> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Mortgage/Rent", "Utilities", "Lawn Care"]);
        assert_eq!(report.rows[1].total, Money::from_dollars(300));
        assert_eq!(report.rows[1].count, 2);
        assert_eq!(report.rows[0].percentage, 60.0);
        assert_eq!(report.total, Money::from_dollars(1000));
    }

    #[test]
    fn test_zero_spending_has_zero_shares() {
        let mut state = AppState::default();
        add(&mut state, "Other", 0);

        let report = CategoryBreakdown::generate(&state);

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].percentage, 0.0);
    }

    #[test]
    fn test_format_terminal() {
        let mut state = AppState::default();
        add(&mut state, "Property Tax", 2500);

        let output = CategoryBreakdown::generate(&state).format_terminal("$");

        assert!(output.contains("Property Tax"));
        assert!(output.contains("$2,500.00"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_format_terminal_empty() {
        let output = CategoryBreakdown::generate(&AppState::default()).format_terminal("$");
        assert!(output.contains("No expenses recorded yet."));
    }
}
