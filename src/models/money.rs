//! Money type for representing currency amounts
//!
//! Amounts are stored as integer cents (i64) so that typed balances such as
//! `123.45` round-trip exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_shell::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
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
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a plain decimal amount
    ///
    /// Accepts "10.50", "-10.50", "10", "10.5" and a leading `$`. At most
    /// two fractional digits are kept; a third and beyond are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let cents = match s.split_once('.') {
            Some((whole, fraction)) => {
                let whole: i64 = whole.parse().map_err(|_| invalid())?;
                if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol before and an optional code after
    pub fn format_with(&self, symbol: &str, suffix: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}{}",
                symbol,
                self.dollars().abs(),
                self.cents_part(),
                suffix
            )
        } else {
            format!(
                "{}{}.{:02}{}",
                symbol,
                self.dollars(),
                self.cents_part(),
                suffix
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$", ""))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
