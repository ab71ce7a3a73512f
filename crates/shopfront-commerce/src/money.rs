//! Money type for representing prices.
//!
//! Amounts are integer cents. The only floating-point step in the storefront
//! is the tax percentage, which is rounded back to whole cents immediately.
//! Integer arithmetic saturates at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Display symbol for the storefront currency.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a fractional cent amount, rounding to the
    /// nearest cent. Halves round up, toward positive infinity.
    ///
    /// ```
    /// use shopfront_commerce::Money;
    /// assert_eq!(Money::from_fractional_cents(1005.4).amount_cents, 1005);
    /// ```
    pub fn from_fractional_cents(cents: f64) -> Self {
        Self::new((cents + 0.5).floor() as i64)
    }

    /// Zero.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Multiply by a decimal factor, rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::from_fractional_cents(self.amount_cents as f64 * factor)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Format as a two-decimal string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }
}

/// Format a cent amount as a two-decimal string.
///
/// Fractional cents are rounded to the nearest cent first.
///
/// ```
/// use shopfront_commerce::format_price;
/// assert_eq!(format_price(999.0), "9.99");
/// assert_eq!(format_price(1000.0), "10.00");
/// ```
pub fn format_price(cents: f64) -> String {
    Money::from_fractional_cents(cents).display_amount()
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.amount_cents = self.amount_cents.saturating_add(other.amount_cents);
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(999.0, "9.99")]
    #[case(1000.0, "10.00")]
    #[case(1005.4, "10.05")]
    #[case(1005.5, "10.06")]
    #[case(-0.5, "0.00")]
    #[case(0.0, "0.00")]
    #[case(7.0, "0.07")]
    #[case(250.0, "2.50")]
    fn test_format_price(#[case] cents: f64, #[case] expected: &str) {
        assert_eq!(format_price(cents), expected);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(-150).display_amount(), "-1.50");
    }

    #[test]
    fn test_money_addition_and_sum() {
        let total: Money = [Money::new(1000), Money::new(500), Money::new(90)]
            .into_iter()
            .sum();
        assert_eq!(total.amount_cents, 1590);

        let mut acc = Money::zero();
        acc += Money::new(25);
        assert_eq!(acc + Money::new(5), Money::new(30));
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::new(1090) * 3).amount_cents, 3270);
    }

    #[test]
    fn test_money_percentage_rounds_to_cent() {
        assert_eq!(Money::new(2500).percentage(10.0).amount_cents, 250);
        // 10% of 4785 is 478.5, which rounds up
        assert_eq!(Money::new(4785).percentage(10.0).amount_cents, 479);
        // -478.5 rounds up too
        assert_eq!(Money::new(-4785).percentage(10.0).amount_cents, -478);
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        assert_eq!(Money::new(1090).multiply(i64::MAX).amount_cents, i64::MAX);
        assert_eq!(Money::new(-2).multiply(i64::MAX).amount_cents, i64::MIN);
        assert_eq!(Money::new(i64::MAX) + Money::new(1), Money::new(i64::MAX));

        let mut acc = Money::new(i64::MAX - 5);
        acc += Money::new(10);
        assert_eq!(acc.amount_cents, i64::MAX);

        let total: Money = [Money::new(i64::MAX), Money::new(i64::MAX)].into_iter().sum();
        assert_eq!(total.amount_cents, i64::MAX);
    }
}
