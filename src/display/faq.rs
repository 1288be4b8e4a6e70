//! FAQ display formatting

use crate::faq::{
    FaqEntry, DISCLAIMER, DISCLAIMER_TITLE, FAQ_ENTRIES, FAQ_SUBTITLE, FAQ_TITLE, RESOURCES,
};

const WRAP_WIDTH: usize = 76;

/// Questions, disclaimer and resources
pub fn format_faq_index() -> String {
    let mut output = format_header();

    for (i, entry) in FAQ_ENTRIES.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, entry.question));
    }
    output.push_str("\nRun `housing faq <NUMBER>` to read an answer.\n\n");

    output.push_str("Additional Resources\n");
    for (title, description) in RESOURCES.iter() {
        output.push_str(&wrap(&format!("{}: {}", title, description), "  ", "    "));
    }

    output
}

/// A single question with its answer and the disclaimer
pub fn format_faq_entry(number: usize, entry: &FaqEntry) -> String {
    let mut output = format_header();
    output.push_str(&format!("{}. {}\n\n", number, entry.question));
    output.push_str(&wrap(entry.answer, "  ", "  "));
    output
}

fn format_header() -> String {
    let mut output = String::new();
    output.push_str(FAQ_TITLE);
    output.push('\n');
    output.push_str(FAQ_SUBTITLE);
    output.push('\n');
    output.push_str(&"=".repeat(WRAP_WIDTH));
    output.push_str("\n\n");
    output.push_str(DISCLAIMER_TITLE);
    output.push('\n');
    output.push_str(&wrap(DISCLAIMER, "  ", "  "));
    output.push('\n');
    output
}

/// Greedy word wrap with separate first-line and continuation indents
fn wrap(text: &str, first_indent: &str, indent: &str) -> String {
    let mut output = String::new();
    let mut line = String::from(first_indent);
    let mut line_has_word = false;

    for word in text.split_whitespace() {
        if line_has_word && line.len() + 1 + word.len() > WRAP_WIDTH {
            output.push_str(&line);
            output.push('\n');
            line = String::from(indent);
            line_has_word = false;
        }
        if line_has_word {
            line.push(' ');
        }
        line.push_str(word);
        line_has_word = true;
    }

    if line_has_word {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq;

    #[test]
    fn test_index_lists_every_question() {
        let output = format_faq_index();
        for entry in FAQ_ENTRIES.iter() {
            assert!(output.contains(entry.question));
        }
        assert!(output.contains("Important Disclaimer"));
        assert!(output.contains("IRS Publication 517"));
    }

    #[test]
    fn test_entry_shows_answer_and_disclaimer() {
        let output = format_faq_entry(4, faq::entry(4).unwrap());
        assert!(output.contains("4. How much housing allowance can I receive?"));
        assert!(output.contains("fair rental value"));
        assert!(output.contains("Important Disclaimer"));
        assert!(!output.contains("Additional Resources"));
    }

    #[test]
    fn test_wrap_respects_width() {
        let wrapped = wrap(DISCLAIMER, "  ", "  ");
        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert!(line.len() <= WRAP_WIDTH, "too long: {}", line);
            assert!(line.starts_with("  "));
        }
    }
}
