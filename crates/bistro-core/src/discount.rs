//! # Discount Policies
//!
//! Pure per-item discount rules selected at checkout.
//!
//! A policy maps (price, category) to a non-negative amount off: the
//! policy's rate applied to the price when the category matches its
//! target, zero otherwise. Policies are applied independently per line
//! item and summed by the order; there is no minimum-order threshold
//! and no cap.

use serde::{Deserialize, Serialize};

use crate::menu::Category;
use crate::money::{DiscountRate, Money};

/// The selectable checkout discount policies.
///
/// Rates stay within [0%, 20%], so a single item's discount can never
/// exceed its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    PizzaSpecial,
    ChickenSpecial,
    MeatSpecial,
    None,
}

impl DiscountPolicy {
    /// Label used on the priced summary, e.g. `Discount (Pizza Special (15% off))`.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountPolicy::PizzaSpecial => "Pizza Special (15% off)",
            DiscountPolicy::ChickenSpecial => "Chicken Special (20% off)",
            DiscountPolicy::MeatSpecial => "Meat Special (10% off)",
            DiscountPolicy::None => "No Discount",
        }
    }

    /// The fractional rate this policy applies to matching items.
    pub fn rate(&self) -> DiscountRate {
        match self {
            DiscountPolicy::PizzaSpecial => DiscountRate::from_bps(1500),
            DiscountPolicy::ChickenSpecial => DiscountRate::from_bps(2000),
            DiscountPolicy::MeatSpecial => DiscountRate::from_bps(1000),
            DiscountPolicy::None => DiscountRate::zero(),
        }
    }

    fn target(&self) -> Option<Category> {
        match self {
            DiscountPolicy::PizzaSpecial => Some(Category::Pizza),
            DiscountPolicy::ChickenSpecial => Some(Category::Chicken),
            DiscountPolicy::MeatSpecial => Some(Category::Meat),
            DiscountPolicy::None => Option::None,
        }
    }

    /// Amount off a single item. Non-matching categories yield zero.
    pub fn amount_off(&self, price: Money, category: Category) -> Money {
        match self.target() {
            Some(target) if target == category => price.apply_rate(self.rate()),
            _ => Money::zero(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_POLICIES: [DiscountPolicy; 4] = [
        DiscountPolicy::PizzaSpecial,
        DiscountPolicy::ChickenSpecial,
        DiscountPolicy::MeatSpecial,
        DiscountPolicy::None,
    ];

    const ALL_CATEGORIES: [Category; 4] = [
        Category::Pizza,
        Category::Burger,
        Category::Chicken,
        Category::Meat,
    ];

    #[test]
    fn test_pizza_special_on_matching_item() {
        // 15% of $12.99 = $1.9485 exactly
        let off = DiscountPolicy::PizzaSpecial.amount_off(Money::from_cents(1299), Category::Pizza);
        assert_eq!(off.amount(), "1.9485".parse().unwrap());
    }

    #[test]
    fn test_non_matching_category_yields_zero() {
        let off = DiscountPolicy::PizzaSpecial.amount_off(Money::from_cents(1299), Category::Burger);
        assert_eq!(off, Money::zero());

        let off = DiscountPolicy::ChickenSpecial.amount_off(Money::from_cents(899), Category::Meat);
        assert_eq!(off, Money::zero());
    }

    #[test]
    fn test_no_discount_always_zero() {
        for category in ALL_CATEGORIES {
            let off = DiscountPolicy::None.amount_off(Money::from_cents(1599), category);
            assert_eq!(off, Money::zero());
        }
    }

    #[test]
    fn test_discount_never_exceeds_price() {
        let price = Money::from_cents(1599);
        for policy in ALL_POLICIES {
            for category in ALL_CATEGORIES {
                let off = policy.amount_off(price, category);
                assert!(off >= Money::zero());
                assert!(off <= price);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DiscountPolicy::PizzaSpecial.label(), "Pizza Special (15% off)");
        assert_eq!(DiscountPolicy::ChickenSpecial.label(), "Chicken Special (20% off)");
        assert_eq!(DiscountPolicy::MeatSpecial.label(), "Meat Special (10% off)");
        assert_eq!(DiscountPolicy::None.label(), "No Discount");
    }
}
