//! Money type for account balances and transaction amounts
//!
//! Amounts are held as whole cents in an `i64`, so balances read from the
//! clients file compare and subtract exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::SubAssign;

/// A monetary amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use client_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that reports overflow instead of wrapping
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse an amount typed by a user or read from the clients file
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10", ".5" and six-place
    /// balances such as "50.000000". Digits past the cents place round half
    /// away from zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digits = fraction.as_bytes();
        let digit = |i: usize| digits.get(i).map(|d| i64::from(d - b'0')).unwrap_or(0);
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol in front ("$10.50", "-$0.07")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, magnitude / 100, magnitude % 100)
    }

    /// Two-decimal form used in the clients file and transaction log ("50.00")
    pub fn to_plain_string(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
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

    fn cents(input: &str) -> Money {
        Money::parse(input).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(5000).to_plain_string(), "50.00");
        assert_eq!(Money::from_cents(-7).to_plain_string(), "-0.07");
    }

    #[test]
    fn test_subtract_and_checked_add() {
        let mut balance = Money::from_cents(1000);
        balance -= Money::from_cents(250);
        assert_eq!(balance, Money::from_cents(750));

        assert_eq!(
            balance.checked_add(Money::from_cents(250)),
            Some(Money::from_cents(1000))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(balance), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(cents("10.50"), Money::from_cents(1050));
        assert_eq!(cents("$10.50"), Money::from_cents(1050));
        assert_eq!(cents("-10.50"), Money::from_cents(-1050));
        assert_eq!(cents("10"), Money::from_cents(1000));
        assert_eq!(cents("10.5"), Money::from_cents(1050));
        assert_eq!(cents("0.05"), Money::from_cents(5));
        assert_eq!(cents(".5"), Money::from_cents(50));
    }

    #[test]
    fn test_parse_six_place_output() {
        assert_eq!(cents("50.000000"), Money::from_cents(5000));
        assert_eq!(cents("29.999999"), Money::from_cents(3000));
        assert_eq!(cents("10.004999"), Money::from_cents(1000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
