//! Monetary amounts in integer minor units.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// An amount of money in cents.
///
/// Prices, line totals and order totals are all exact; `Display` renders two
/// decimals (`70.00`). The operators saturate at `u64::MAX` cents; code that
/// must reject out-of-range amounts uses [`checked_add`](Money::checked_add) and
/// [`checked_mul`](Money::checked_mul).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Money::from_units(20)` is `20.00`.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// `None` if the sum does not fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` if the product does not fit.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_units(70).to_string(), "70.00");
        assert_eq!(Money::from_cents(1205).to_string(), "12.05");
        assert_eq!(Money::from_cents(9).to_string(), "0.09");
    }

    #[test]
    fn line_and_order_totals_are_exact() {
        let lines = [Money::from_units(20) * 2, Money::from_units(25) * 1];
        let total = lines.into_iter().sum::<Money>() + Money::from_units(5);
        assert_eq!(total, Money::from_units(70));

        // 0.10 three times is 0.30, not 0.30000000000000004.
        let dimes: Money = std::iter::repeat(Money::from_cents(10)).take(3).sum();
        assert_eq!(dimes.cents(), 30);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let price = Money::from_cents(u64::MAX / 2 + 1);
        assert_eq!(price.checked_mul(2), None);
        assert_eq!(price.checked_mul(1), Some(price));
        assert_eq!(Money::from_cents(u64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_units(20).checked_mul(u32::MAX),
            Some(Money::from_cents(2000 * u64::from(u32::MAX)))
        );

        // The operators never wrap.
        assert_eq!((price * 2).cents(), u64::MAX);
        assert_eq!((Money::from_cents(u64::MAX) + Money::from_cents(1)).cents(), u64::MAX);
    }

    #[test]
    fn serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(450)).unwrap();
        assert_eq!(json, "450");
    }
}
