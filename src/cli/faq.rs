//! FAQ CLI command

use crate::display::faq::{format_faq_entry, format_faq_index};
use crate::error::{HousingError, HousingResult};
use crate::faq;

/// Print the question list, or a single answer when `number` is given
pub fn handle_faq_command(number: Option<usize>) -> HousingResult<()> {
    match number {
        None => print!("{}", format_faq_index()),
        Some(n) => {
            let entry = faq::entry(n).ok_or_else(|| HousingError::NotFound {
                entity_type: "FAQ entry",
                identifier: n.to_string(),
            })?;
            print!("{}", format_faq_entry(n, entry));
        }
    }
    Ok(())
}
