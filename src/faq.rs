//! Housing allowance FAQ content
//!
//! Static reference text shown by the `faq` command.

/// A single question and its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_TITLE: &str = "Housing Allowance FAQ";

pub const FAQ_SUBTITLE: &str = "Common questions about housing allowance benefits for pastors";

pub const DISCLAIMER_TITLE: &str = "Important Disclaimer";

pub const DISCLAIMER: &str = "This information is for educational purposes only and should not be \
considered as tax or legal advice. Tax laws can be complex and change frequently. Always consult \
with a qualified tax professional or CPA who understands ministerial tax issues for personalized \
guidance.";

/// Further reading, as (title, description) pairs
pub const RESOURCES: [(&str, &str); 3] = [
    (
        "IRS Publication 517",
        "\"Social Security and Other Information for Members of the Clergy and Religious Workers\"",
    ),
    (
        "Church Law & Tax",
        "Provides comprehensive resources for ministerial tax issues",
    ),
    (
        "Professional Help",
        "Consider consulting with a CPA who specializes in ministerial taxes",
    ),
];

pub const FAQ_ENTRIES: [FaqEntry; 10] = [
    FaqEntry {
        question: "What is a housing allowance?",
        answer: "A housing allowance (also called a parsonage allowance) is a tax-free benefit that \
churches can provide to ordained ministers to help cover housing expenses. This allowance must be \
designated in advance by the church and can only be used for qualifying housing expenses.",
    },
    FaqEntry {
        question: "Who is eligible for a housing allowance?",
        answer: "Only ordained, licensed, or commissioned ministers who perform ministerial services \
are eligible for housing allowance benefits. The minister must be serving in a capacity that is \
recognized by their church or denomination.",
    },
    FaqEntry {
        question: "What expenses qualify for housing allowance?",
        answer: "Qualifying expenses include: mortgage payments or rent, property taxes, \
homeowners/renters insurance, utilities, home repairs and maintenance, furnishings and appliances, \
lawn care, home security systems, and other expenses directly related to providing a home.",
    },
    FaqEntry {
        question: "How much housing allowance can I receive?",
        answer: "The housing allowance is limited to the lesser of: (1) the amount officially \
designated by your church, (2) your actual housing expenses, or (3) the fair rental value of your \
home (including furnishings and utilities).",
    },
    FaqEntry {
        question: "Do I need to track my housing expenses?",
        answer: "Yes! It's crucial to maintain detailed records of all housing-related expenses. You \
must be able to substantiate your expenses if questioned by the IRS. Keep receipts, invoices, and \
documentation for all claimed expenses.",
    },
    FaqEntry {
        question: "When must the housing allowance be designated?",
        answer: "The housing allowance must be officially designated by your church before the tax \
year begins or before you start your ministerial duties. Retroactive designations are not allowed.",
    },
    FaqEntry {
        question: "Is housing allowance subject to Social Security taxes?",
        answer: "Yes, housing allowance is generally subject to Social Security and Medicare taxes \
(self-employment tax) for ministers, even though it's excluded from federal income tax.",
    },
    FaqEntry {
        question: "Can I claim housing allowance if I live in a church-provided parsonage?",
        answer: "If you live in a church-provided parsonage, you generally cannot claim a housing \
allowance. However, you may be able to receive an allowance for utilities, furnishings, and other \
qualifying expenses not provided by the church.",
    },
    FaqEntry {
        question: "What records should I keep?",
        answer: "Keep detailed records including: receipts for all housing expenses, bank statements, \
mortgage statements, utility bills, repair invoices, purchase receipts for furniture and \
appliances, and your church's official housing allowance designation.",
    },
    FaqEntry {
        question: "Can I use this app for tax preparation?",
        answer: "This app helps you track and organize your housing allowance expenses, but it's not \
a substitute for professional tax advice. Always consult with a qualified tax professional or CPA \
who understands ministerial tax issues for tax preparation and planning.",
    },
];

/// Look up an entry by its 1-based number
pub fn entry(number: usize) -> Option<&'static FaqEntry> {
    number.checked_sub(1).and_then(|i| FAQ_ENTRIES.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_numbering_is_one_based() {
        assert_eq!(entry(1).unwrap().question, "What is a housing allowance?");
        assert_eq!(entry(10).unwrap().question, "Can I use this app for tax preparation?");
        assert!(entry(0).is_none());
        assert!(entry(11).is_none());
    }

    #[test]
    fn test_line_continuations_keep_single_spaces() {
        for faq in FAQ_ENTRIES.iter() {
            assert!(!faq.answer.contains("  "), "double space in: {}", faq.question);
        }
        assert!(!DISCLAIMER.contains("  "));
    }
}
