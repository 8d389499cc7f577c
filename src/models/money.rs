//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 hundredths) so that totals
//! never accumulate floating-point error. On disk an amount is a plain JSON
//! number in major units, e.g. `1200.5`.
//!
//! Parsed and loaded amounts are limited to [`Money::MAX`] in magnitude, small
//! enough that the float written to disk reads back to the same minor units.
//! Arithmetic saturates instead of overflowing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols stripped from user input before parsing
const KNOWN_SYMBOLS: [&str; 5] = ["₹", "Rs.", "$", "€", "£"];

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from input or disk: 9,99,99,99,99,99,999.99
    pub const MAX: Money = Money(999_999_999_999_999);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_minor(120050); // 1,200.50
    /// assert_eq!(amount.major(), 1200);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major units (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional part (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Amount in major units as a float, used only for serialization
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a float in major units, rounding to the nearest minor unit
    ///
    /// Returns `None` for non-finite values and magnitudes above [`Money::MAX`].
    pub fn from_f64(value: f64) -> Option<Self> {
        let minor = (value * 100.0).round();
        if minor.is_finite() && minor.abs() <= Self::MAX.0 as f64 {
            Some(Self(minor as i64))
        } else {
            None
        }
    }

    fn within_bounds(self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0 as u64
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "1200", "1200.50", "1,200.5", "₹1,200", "-5". A third decimal
    /// digit rounds half up ("0.005" is one minor unit); later digits are
    /// ignored. Magnitudes above [`Money::MAX`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };

        let rest = KNOWN_SYMBOLS
            .iter()
            .find_map(|sym| rest.strip_prefix(sym))
            .unwrap_or(rest)
            .trim_start();

        let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
        let (whole, frac) = match cleaned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (cleaned.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Digits validated above
        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let round_up = digit(2) >= 5;
        let frac = digit(0) * 10 + digit(1) + i64::from(round_up);

        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(invalid)?;

        let amount = Self(if negative { -minor } else { minor });
        if amount.within_bounds() {
            Ok(amount)
        } else {
            Err(MoneyParseError::OutOfRange(s.to_string()))
        }
    }

    /// Format with an explicit currency symbol and digit grouping
    pub fn format_with(&self, symbol: &str, grouping: DigitGrouping) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = grouping.group(self.major().unsigned_abs());
        if self.minor_part() == 0 {
            format!("{}{}{}", sign, symbol, whole)
        } else {
            format!("{}{}{}.{:02}", sign, symbol, whole, self.minor_part())
        }
    }
}

/// How the integer part of an amount is split into groups for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// 12,34,567 - last three digits, then pairs
    #[default]
    Indian,
    /// 1,234,567
    Western,
}

impl DigitGrouping {
    /// Insert separators into a non-negative integer
    pub fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let step = match self {
            Self::Indian => 2,
            Self::Western => 3,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(step);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{}", groups.join(","), tail)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with("₹", DigitGrouping::Indian))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.minor_part() == 0 {
            serializer.serialize_i64(self.major())
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
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
        self.0 = self.0.saturating_sub(other.0);
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
            MoneyParseError::OutOfRange(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(120050);
        assert_eq!(m.minor(), 120050);
        assert_eq!(m.major(), 1200);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1200").unwrap().minor(), 120000);
        assert_eq!(Money::parse("1200.50").unwrap().minor(), 120050);
        assert_eq!(Money::parse("1,200.5").unwrap().minor(), 120050);
        assert_eq!(Money::parse("₹50,000").unwrap().minor(), 5000000);
        assert_eq!(Money::parse("  $10 ").unwrap().minor(), 1000);
        assert_eq!(Money::parse(".75").unwrap().minor(), 75);
        assert_eq!(Money::parse("-5").unwrap().minor(), -500);
        assert_eq!(Money::parse("1.234").unwrap().minor(), 123);
    }

    #[test]
    fn test_parse_rounds_third_decimal() {
        assert_eq!(Money::parse("0.009").unwrap().minor(), 1);
        assert_eq!(Money::parse("0.005").unwrap().minor(), 1);
        assert_eq!(Money::parse("0.0049").unwrap().minor(), 0);
        assert_eq!(Money::parse("1.995").unwrap().minor(), 200);
        assert_eq!(Money::parse("-2.499").unwrap().minor(), -250);
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(Money::parse("9999999999999.99").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-9999999999999.99").unwrap(), -Money::MAX);
        assert!(matches!(
            Money::parse("10000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        // Rounding can push a value over the limit
        assert!(Money::parse("9999999999999.995").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_minor(i64::MAX - 1);
        assert_eq!((huge + Money::MAX).minor(), i64::MAX);
        assert_eq!((-huge - Money::MAX).minor(), i64::MIN);
        assert_eq!((-Money::from_minor(i64::MIN)).minor(), i64::MAX);

        let total: Money = std::iter::repeat(Money::MAX).take(10_000).sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12a").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.₹").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_indian_grouping() {
        let g = DigitGrouping::Indian;
        assert_eq!(g.group(0), "0");
        assert_eq!(g.group(999), "999");
        assert_eq!(g.group(1200), "1,200");
        assert_eq!(g.group(50000), "50,000");
        assert_eq!(g.group(1234567), "12,34,567");
        assert_eq!(g.group(123456789), "12,34,56,789");
    }

    #[test]
    fn test_western_grouping() {
        let g = DigitGrouping::Western;
        assert_eq!(g.group(1200), "1,200");
        assert_eq!(g.group(1234567), "1,234,567");
        assert_eq!(g.group(123456), "123,456");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(50000).to_string(), "₹50,000");
        assert_eq!(Money::from_minor(120050).to_string(), "₹1,200.50");
        assert_eq!(Money::from_major(-1200).to_string(), "-₹1,200");
        assert_eq!(Money::zero().to_string(), "₹0");
        assert_eq!(
            Money::from_minor(123456705).format_with("$", DigitGrouping::Western),
            "$1,234,567.05"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!((a + b).major(), 15);
        assert_eq!((a - b).major(), 5);
        assert_eq!((-a).major(), -10);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.major(), 20);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_major(50000)).unwrap(), "50000");
        assert_eq!(serde_json::to_string(&Money::from_minor(120050)).unwrap(), "1200.5");

        let whole: Money = serde_json::from_str("1200").unwrap();
        assert_eq!(whole, Money::from_major(1200));
        let fractional: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(fractional.minor(), 10);
    }

    #[test]
    fn test_disk_format_is_exact_at_the_limit() {
        for minor in [
            Money::MAX.minor(),
            Money::MAX.minor() - 1,
            -Money::MAX.minor(),
            123_456_789_012_345,
            999_999_999_999_901,
            1,
        ] {
            let amount = Money::from_minor(minor);
            let json = serde_json::to_string(&amount).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount, "{} via {}", minor, json);
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("10000000000000").is_err());
        assert!(serde_json::from_str::<Money>("123456789012345.67").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }
}
