//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact. On the
//! wire (the persisted state document and exports) an amount is a plain JSON
//! number in currency units, e.g. `1000.5`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from user input or a stored document
    /// ($1 trillion). Sums of many such amounts still fit in an `i64`.
    pub const LIMIT: Money = Money(100_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use housing_allowance::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Create a Money amount from a decimal number of currency units,
    /// rounding to the nearest cent the same way [`Money::parse`] does
    ///
    /// Returns `None` for non-finite values and values beyond [`Money::LIMIT`].
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Display gives the shortest decimal that reads back as `value`
        Self::parse(&value.to_string()).ok()
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number of currency units
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "1,250.00", "10".
    /// Digits past the cents are rounded half away from zero, so "1.995"
    /// is $2.00. Amounts beyond [`Money::LIMIT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',').collect();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = match s.split_once('.') {
            Some((whole, frac)) => {
                if frac.contains('.') || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }

                let dollars: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };

                // Pad to 2 digits; the third digit rounds
                let mut cents: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                };
                if matches!(frac.as_bytes().get(2), Some(d) if *d >= b'5') {
                    cents += 1;
                }

                dollars
                    .checked_mul(100)
                    .and_then(|d| d.checked_add(cents))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        if cents > Self::LIMIT.0 {
            return Err(MoneyParseError::OutOfRange(original.to_string()));
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse an amount, coercing anything unparseable to zero
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.dollars().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("money amount out of range: {}", value)))
    }
}

// Arithmetic saturates instead of wrapping or panicking
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount too large (limit {}): {}", Money::LIMIT, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_dollars(12000).to_string(), "$12,000.00");
        assert_eq!(Money::from_cents(123456789).to_string(), "$1,234,567.89");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_dollars(1000).format_with_symbol("€"), "€1,000.00");
        assert_eq!(Money::from_cents(-50).format_with_symbol("£"), "-£0.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("12,000").unwrap().cents(), 1_200_000);
    }

    #[test]
    fn test_parse_rounds_sub_cent_digits() {
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
        assert_eq!(Money::parse("1.994").unwrap().cents(), 199);
        assert_eq!(Money::parse("0.125").unwrap().cents(), 13);
        assert_eq!(Money::parse("-0.125").unwrap().cents(), -13);
        assert_eq!(Money::parse("9.995").unwrap(), Money::from_dollars(10));
    }

    #[test]
    fn test_parse_and_deserialize_round_alike() {
        for input in ["1.999", "1.005", "0.125", "42.4449", "7"] {
            let parsed = Money::parse(input).unwrap();
            let deserialized: Money = serde_json::from_str(input).unwrap();
            assert_eq!(parsed, deserialized, "{}", input);
        }
    }

    #[test]
    fn test_amounts_beyond_limit_are_rejected() {
        assert_eq!(Money::parse("1,000,000,000,000").unwrap(), Money::LIMIT);
        assert!(matches!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("99999999999999999999").is_err());
        assert!(serde_json::from_str::<Money>("90000000000000000").is_err());
        assert_eq!(Money::parse_or_zero("90000000000000000"), Money::zero());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        let min = Money::from_cents(i64::MIN);
        assert_eq!(min - Money::from_cents(1), min);

        let total: Money = vec![max, max].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.x").is_err());
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(Money::parse_or_zero("not a number"), Money::zero());
        assert_eq!(Money::parse_or_zero("250"), Money::from_dollars(250));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serializes_as_currency_units() {
        assert_eq!(serde_json::to_string(&Money::from_dollars(1000)).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");
    }

    #[test]
    fn test_deserializes_integers_and_decimals() {
        let whole: Money = serde_json::from_str("12000").unwrap();
        assert_eq!(whole, Money::from_dollars(12000));

        let fractional: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(fractional.cents(), 1999);

        let rounded: Money = serde_json::from_str("0.125").unwrap();
        assert_eq!(rounded.cents(), 13);
    }

    #[test]
    fn test_deserialize_rejects_non_numbers() {
        assert!(serde_json::from_str::<Money>("\"ten\"").is_err());
    }
}
