//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON number with two decimal places
//! (`250.0`, `12.5`), so the ledger file stays readable by other tools.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currency symbols accepted in front of an amount
const CURRENCY_SYMBOLS: [char; 4] = ['$', '₹', '€', '£'];

/// Largest cent count stored, 999,999,999,999.99 units. Below 2^40 units an
/// `f64` keeps every amount exact to the cent.
const MAX_CENTS: i64 = 99_999_999_999_999;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount that survives the trip through the JSON file
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Amount as a floating point number of units, for serialization only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build an amount from a floating point number of units, rounding to cents
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "₹10.50", "$10", ".5" and "10.".
    /// Digits past the second decimal place are rounded half-up. Amounts
    /// beyond [`Money::MAX`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };
        let rest = rest
            .strip_prefix(&CURRENCY_SYMBOLS[..])
            .unwrap_or(rest)
            .trim_start();

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let frac = frac.as_bytes();
        let digit = |i: usize| frac.get(i).map(|b| i64::from(b - b'0')).unwrap_or(0);
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .filter(|total| *total <= MAX_CENTS)
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Add two amounts, `None` if the result overflows
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, `None` if the total overflows
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
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
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(5)), "    0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(25000).format_with_symbol("₹"), "₹250.00");
        assert_eq!(Money::from_cents(-150).format_with_symbol("$"), "-$1.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹ 250").unwrap().cents(), 25000);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse("  15000 ").unwrap().cents(), 1500000);
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("1.004").unwrap().cents(), 100);
        assert_eq!(Money::parse("0.999").unwrap().cents(), 100);
        assert_eq!(Money::parse("0.001").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", ".", "abc", "1.2.3", "12a", "1,000", "--5", "1e3"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_single_currency_symbol() {
        assert_eq!(Money::parse("€5").unwrap().cents(), 500);
        for input in ["₹$5", "$$5", "£ €5"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_upper_bound() {
        assert_eq!(Money::parse("999999999999.99").unwrap(), Money::MAX);
        assert!(Money::parse("1000000000000").is_err());
        assert!(Money::parse("123456789012345.67").is_err());
        assert!(Money::parse("-1000000000000").is_err());
    }

    #[test]
    fn test_large_amounts_survive_json() {
        for cents in [MAX_CENTS, 12_345_678_901_234, 98_765_432_109_876, 1_000_000_000_001] {
            let amount = Money::from_cents(cents);
            let json = serde_json::to_string(&amount).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount, "lost precision through {}", json);
        }

        assert!(serde_json::from_str::<Money>("123456789012345.67").is_err());
        assert!(Money::from_f64(1e300).is_none());
    }

    #[test]
    fn test_checked_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        assert_eq!(Money::checked_sum(amounts), Some(Money::from_cents(600)));
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));

        let huge = Money::from_cents(i64::MAX - 1);
        assert_eq!(huge.checked_add(Money::from_cents(5)), None);
        assert_eq!(Money::checked_sum([huge, huge]), None);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_integer_and_float() {
        let whole: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(whole.cents(), 1500000);

        let float: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(float.cents(), 1999);

        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }
}
