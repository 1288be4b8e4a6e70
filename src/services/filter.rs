//! Expense list filtering
//!
//! Narrows an expense list the way the expense page does: a free-text search
//! over description and category, an exact category, and an optional date
//! window.

use chrono::NaiveDate;

use crate::models::Expense;

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of description or category
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search term; blank terms match everything
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Filter by exact category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only expenses on or after `date`
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Only expenses on or before `date`
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single expense against every criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(term) = &self.search {
            if !expense.matches_search(term) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if expense.category != *category {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        true
    }

    /// Matching expenses, in their stored order
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        let matching = expenses.iter().filter(|e| self.matches(e));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId, Money};

    fn expense(description: &str, category: &str, day: u32) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        ExpenseDraft::new(description, Money::from_dollars(10), category, date)
            .into_expense(ExpenseId::new())
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("March rent", "Mortgage/Rent", 1),
            expense("Electric bill", "Utilities", 5),
            expense("Water bill", "Utilities", 12),
            expense("New couch", "Furnishings", 20),
        ]
    }

    fn descriptions(found: &[&Expense]) -> Vec<String> {
        found.iter().map(|e| e.description.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let expenses = sample();
        assert_eq!(ExpenseFilter::new().apply(&expenses).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description() {
        let expenses = sample();
        let found = ExpenseFilter::new().search("BILL").apply(&expenses);
        assert_eq!(descriptions(&found), vec!["Electric bill", "Water bill"]);
    }

    #[test]
    fn test_search_matches_category() {
        let expenses = sample();
        let found = ExpenseFilter::new().search("furnish").apply(&expenses);
        assert_eq!(descriptions(&found), vec!["New couch"]);
    }

    #[test]
    fn test_blank_search_matches_all() {
        let expenses = sample();
        assert_eq!(ExpenseFilter::new().search("  ").apply(&expenses).len(), 4);
    }

    #[test]
    fn test_category_is_exact() {
        let expenses = sample();
        assert_eq!(ExpenseFilter::new().category("Utilities").apply(&expenses).len(), 2);
        assert!(ExpenseFilter::new().category("utilities").apply(&expenses).is_empty());
        assert!(ExpenseFilter::new().category("Util").apply(&expenses).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let expenses = sample();
        let found = ExpenseFilter::new()
            .search("water")
            .category("Utilities")
            .apply(&expenses);
        assert_eq!(descriptions(&found), vec!["Water bill"]);
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let expenses = sample();
        let found = ExpenseFilter::new()
            .from(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .to(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap())
            .apply(&expenses);
        assert_eq!(descriptions(&found), vec!["Electric bill", "Water bill"]);
    }

    #[test]
    fn test_limit() {
        let expenses = sample();
        let found = ExpenseFilter::new().limit(1).apply(&expenses);
        assert_eq!(descriptions(&found), vec!["March rent"]);
    }
}
