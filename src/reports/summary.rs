//! Allowance Summary
//!
//! The dashboard view: allowance, spending, what is left, how much of the
//! allowance has been used, and the most recent expenses.

use std::fmt;

use crate::config::Settings;
use crate::models::{AppState, Expense, Money};

const BAR_WIDTH: usize = 40;

/// How close spending is to the allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Healthy,
    Warning,
    Critical,
}

impl UsageLevel {
    /// Classify a usage percentage against the configured thresholds
    ///
    /// Thresholds are exclusive: exactly at the warning threshold is still
    /// healthy.
    pub fn classify(percentage: f64, settings: &Settings) -> Self {
        if percentage > settings.critical_threshold {
            Self::Critical
        } else if percentage > settings.warning_threshold {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    fn bar_char(&self) -> char {
        match self {
            Self::Healthy => '=',
            Self::Warning => '+',
            Self::Critical => '!',
        }
    }
}

impl fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Dashboard figures for the current state
#[derive(Debug, Clone)]
pub struct AllowanceSummary {
    /// Designated annual allowance
    pub allowance: Money,
    /// Sum of all expenses
    pub total_spent: Money,
    /// Allowance minus spending (negative when overspent)
    pub remaining: Money,
    /// Spending as a percentage of the allowance; 0 with no allowance
    pub usage_percentage: f64,
    pub level: UsageLevel,
    /// Most recently added expenses, newest first
    pub recent: Vec<Expense>,
    /// Total number of expenses
    pub expense_count: usize,
}

impl AllowanceSummary {
    /// Summarize `state` using the thresholds and recent count from `settings`
    pub fn generate(state: &AppState, settings: &Settings) -> Self {
        let allowance = state.annual_allowance;
        let total_spent = state.total_expenses();
        let usage_percentage = usage_percentage(total_spent, allowance);

        Self {
            allowance,
            total_spent,
            remaining: state.remaining_allowance(),
            usage_percentage,
            level: UsageLevel::classify(usage_percentage, settings),
            recent: state
                .expenses
                .iter()
                .rev()
                .take(settings.recent_count)
                .cloned()
                .collect(),
            expense_count: state.expenses.len(),
        }
    }

    /// Text progress bar, capped at full width
    pub fn usage_bar(&self) -> String {
        let filled = ((self.usage_percentage / 100.0) * BAR_WIDTH as f64).round();
        let filled = (filled.max(0.0) as usize).min(BAR_WIDTH);
        format!(
            "[{}{}]",
            self.level.bar_char().to_string().repeat(filled),
            " ".repeat(BAR_WIDTH - filled)
        )
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str("Housing Allowance Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Annual Allowance:",
            self.allowance.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Spent:",
            self.total_spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Remaining:",
            self.remaining.format_with_symbol(symbol)
        ));

        output.push_str(&format!(
            "\nAllowance Usage: {:.1}% ({})\n",
            self.usage_percentage, self.level
        ));
        output.push_str(&self.usage_bar());
        output.push('\n');

        output.push_str("\nRecent Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No expenses recorded yet.\n");
        } else {
            for expense in &self.recent {
                output.push_str(&format!(
                    "{:<28} {:<12} {:>16}\n",
                    truncate(&expense.description, 28),
                    settings.format_date(expense.date),
                    expense.amount.format_with_symbol(symbol)
                ));
                output.push_str(&format!("  {}\n", expense.category));
            }
        }

        output
    }
}

/// Spending as a percentage of the allowance, 0 when the allowance is not positive
pub fn usage_percentage(spent: Money, allowance: Money) -> f64 {
    if !allowance.is_positive() {
        return 0.0;
    }
    spent.cents() as f64 / allowance.cents() as f64 * 100.0
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
