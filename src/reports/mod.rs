//! Reports
//!
//! The allowance dashboard and the per-category spending breakdown.

pub mod categories;
pub mod summary;

pub use categories::{CategoryBreakdown, CategorySpending};
pub use summary::{usage_percentage, AllowanceSummary, UsageLevel};
