//! Category display formatting

use crate::models::Expense;

/// Format the category list, showing how many expenses use each
pub fn format_category_list(categories: &[String], expenses: &[Expense]) -> String {
    if categories.is_empty() {
        return "No categories defined.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<4} {:<32} {:>8}\n", "#", "Category", "Expenses"));
    output.push_str(&"-".repeat(46));
    output.push('\n');

    for (i, name) in categories.iter().enumerate() {
        let count = expenses.iter().filter(|e| e.category == *name).count();
        output.push_str(&format!("{:<4} {:<32} {:>8}\n", i + 1, name, count));
    }

    output
}

/// Format a plain list of names, one per line
pub fn format_name_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No categories in use.\n".to_string();
    }
    names.iter().map(|n| format!("{}\n", n)).collect()
}
