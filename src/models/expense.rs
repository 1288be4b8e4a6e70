//! Expense model
//!
//! An expense is a single outlay recorded against the housing allowance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::attachment::Attachment;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded housing expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Category name
    pub category: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Supporting documents, in the order they were attached
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Expense {
    /// Validate the fields a user supplies
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.description, self.amount, &self.category)
    }

    /// Case-insensitive match of `term` against description or category
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.description.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }

    /// Check if this expense has any attachments
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Non-empty notes, if any
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.description, self.amount)
    }
}

/// An expense that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl ExpenseDraft {
    /// Create a draft with the required fields
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
            notes: None,
            attachments: Vec::new(),
        }
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Append an attachment
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Validate the fields a user supplies
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.description, self.amount, &self.category)
    }

    /// Turn the draft into a stored expense with the given id
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
            notes: self.notes,
            attachments: self.attachments,
        }
    }
}

fn validate_fields(
    description: &str,
    amount: Money,
    category: &str,
) -> Result<(), ExpenseValidationError> {
    if description.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }

    if amount.is_negative() {
        return Err(ExpenseValidationError::NegativeAmount(amount));
    }

    if amount > Money::LIMIT {
        return Err(ExpenseValidationError::AmountTooLarge(amount));
    }

    if category.trim().is_empty() {
        return Err(ExpenseValidationError::MissingCategory);
    }

    Ok(())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Expense amount {} exceeds the limit of {}", amount, Money::LIMIT)
            }
            Self::MissingCategory => write!(f, "Expense must have a category"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rent() -> Expense {
        ExpenseDraft::new("Rent", Money::from_dollars(1000), "Mortgage/Rent", date("2024-01-01"))
            .into_expense(ExpenseId::new())
    }

    #[test]
    fn test_draft_into_expense_keeps_fields() {
        let id = ExpenseId::new();
        let expense = ExpenseDraft::new("Water bill", Money::from_cents(4550), "Utilities", date("2024-02-10"))
            .with_notes("February")
            .into_expense(id);

        assert_eq!(expense.id, id);
        assert_eq!(expense.description, "Water bill");
        assert_eq!(expense.amount.cents(), 4550);
        assert_eq!(expense.notes_text(), Some("February"));
        assert!(!expense.has_attachments());
    }

    #[test]
    fn test_validation() {
        assert!(rent().validate().is_ok());

        let mut expense = rent();
        expense.description = "   ".into();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyDescription));

        let mut expense = rent();
        expense.amount = Money::from_cents(-1);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(_))
        ));

        let mut expense = rent();
        expense.category = String::new();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::MissingCategory));
    }

    #[test]
    fn test_amount_limit() {
        let mut expense = rent();
        expense.amount = Money::LIMIT;
        assert!(expense.validate().is_ok());

        expense.amount = Money::LIMIT + Money::from_cents(1);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let mut expense = rent();
        expense.amount = Money::zero();
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_matches_search() {
        let expense = rent();
        assert!(expense.matches_search("RENT"));
        assert!(expense.matches_search("mortgage"));
        assert!(expense.matches_search(""));
        assert!(!expense.matches_search("lawn"));
    }

    #[test]
    fn test_serialized_layout() {
        let expense = rent();
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["description"], "Rent");
        assert_eq!(json["amount"], 1000);
        assert_eq!(json["category"], "Mortgage/Rent");
        assert_eq!(json["date"], "2024-01-01");
        assert!(json["notes"].is_null());
        assert!(json["attachments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "description": "Mower repair",
            "amount": 80.25,
            "category": "Lawn Care",
            "date": "2024-05-03"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.cents(), 8025);
        assert_eq!(expense.notes, None);
        assert!(expense.attachments.is_empty());
    }

    #[test]
    fn test_blank_notes_are_not_text() {
        let mut expense = rent();
        expense.notes = Some("  ".into());
        assert_eq!(expense.notes_text(), None);
    }
}
