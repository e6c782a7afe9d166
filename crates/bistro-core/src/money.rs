//! # Money Module
//!
//! Provides the `Money` type for menu prices and order totals.
//!
//! ## Whole Rupees Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu prices are whole rupees: "Pasta Carbonara - Rs 1299"             │
//! │                                                                         │
//! │  • No paisa, no decimals, no floating point                            │
//! │  • Totals are plain integer sums                                       │
//! │  • The amount a customer types must equal the total exactly            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! let pasta = Money::from_rupees(1299);
//! let kheer = Money::from_rupees(799);
//!
//! let total = pasta * 2 + kheer;
//! assert_eq!(total.rupees(), 3397);
//! assert_eq!(total.to_string(), "Rs 3397");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole rupees.
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► Order.items[..].price ──► Order::calculate_total_price
///                                                     │
///                                                     ▼
///                                 "Amount to pay" must equal this exactly
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Currency prefix used for every rendered amount.
    pub const SYMBOL: &'static str = "Rs";

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(799).rupees(), 799);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the amount in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates at the i64 bounds instead of wrapping or panicking.

/// Renders the fixed `Rs <integer>` convention. No locale handling.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::SYMBOL, self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0.saturating_mul(i64::from(qty)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(1299)), "Rs 1299");
        assert_eq!(format!("{}", Money::from_rupees(0)), "Rs 0");
        assert_eq!(format!("{}", Money::from_rupees(100000)), "Rs 100000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1000);
        let b = Money::from_rupees(500);

        assert_eq!((a + b).rupees(), 1500);
        assert_eq!((a * 3).rupees(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.rupees(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_rupees(i64::MAX);
        assert_eq!(max + Money::from_rupees(1), max);
        assert_eq!(max * 999, max);
        assert_eq!(Money::from_rupees(i64::MIN) * 2, Money::from_rupees(i64::MIN));

        let mut running = max;
        running += Money::from_rupees(799);
        assert_eq!(running, max);

        let total: Money = [max, max, max].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let prices: Vec<Money> = Vec::new();
        let total: Money = prices.iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_matches_arithmetic() {
        let prices = [1299, 1299, 799].map(Money::from_rupees);
        let total: Money = prices.into_iter().sum();
        assert_eq!(total.rupees(), 1299 * 2 + 799);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_rupees(799)).unwrap();
        assert_eq!(json, "799");
    }
}
