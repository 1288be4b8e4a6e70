//! Expense categories
//!
//! Categories are plain labels kept in an ordered, append-only list. The list
//! is seeded with the usual qualifying housing expense types.

use super::expense::Expense;

/// Categories every new state starts with, in display order
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Mortgage/Rent",
    "Property Tax",
    "Utilities",
    "Home Insurance",
    "Maintenance & Repairs",
    "Furnishings",
    "Appliances",
    "Lawn Care",
    "Home Security",
    "Other",
];

/// The seeded category list
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Trim user input for a new category name; `None` if nothing is left
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Distinct categories used by `expenses`, in order of first appearance
pub fn used_categories(expenses: &[Expense]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for expense in expenses {
        if !seen.iter().any(|c| c == &expense.category) {
            seen.push(expense.category.clone());
        }
    }
    seen
}

/// Exact (case-sensitive) lookup, matching how expenses reference categories
pub fn contains(categories: &[String], name: &str) -> bool {
    categories.iter().any(|c| c == name)
}
