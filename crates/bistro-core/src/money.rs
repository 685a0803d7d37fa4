//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                 │
//! │                                                             │
//! │  In floating point:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!               │
//! │                                                             │
//! │  Integer cents are exact but cannot hold a per-item         │
//! │  percentage discount:                                       │
//! │    15% of $12.99 = $1.9485  → not a whole cent              │
//! │                                                             │
//! │  OUR SOLUTION: rust_decimal                                 │
//! │    Amounts are exact decimals at full precision;            │
//! │    rounding to two places happens only on display.          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::{DiscountRate, Money};
//!
//! // Create from cents (preferred for fixed catalog prices)
//! let price = Money::from_cents(1299); // $12.99
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // $17.99
//!
//! // Exact rate application
//! let off = price.apply_rate(DiscountRate::from_bps(1500)); // $1.9485
//! assert_eq!(format!("{}", off), "$1.95"); // display rounds, the value does not
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Full precision internally**: a 15% discount on $12.99 is held as
///   exactly $1.9485; two-decimal rounding is a display concern
/// - **Derives**: full serde support for receipt export
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying exact decimal amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Applies a fractional rate exactly, with no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::{DiscountRate, Money};
    ///
    /// let price = Money::from_cents(1299);           // $12.99
    /// let off = price.apply_rate(DiscountRate::from_bps(1500)); // 15%
    /// assert_eq!(off.amount(), "1.9485".parse().unwrap());
    /// ```
    pub fn apply_rate(&self, rate: DiscountRate) -> Money {
        Money(self.0 * Decimal::new(rate.bps() as i64, 4))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to two decimals (half away from zero), receipt style.
///
/// The stored value keeps full precision; only the rendering rounds.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        shown.rescale(2);
        if shown.is_sign_negative() {
            write!(f, "-${}", -shown)
        } else {
            write!(f, "${}", shown)
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (the pizza special)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
