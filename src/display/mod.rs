//! Display formatting for terminal output
//!
//! Functions here return strings; the CLI decides where to print them.

pub mod category;
pub mod expense;
pub mod faq;

pub use category::{format_category_list, format_name_list};
pub use expense::{format_attachment, format_expense_details, format_expense_table, format_size};
pub use faq::{format_faq_entry, format_faq_index};
