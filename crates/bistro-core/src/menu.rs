//! # Menu Item Model
//!
//! Base dishes plus stackable add-on decoration.
//!
//! ## Decoration Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  DecoratedItem(ExtraCheese)                                 │
//! │    └── owns ── DecoratedItem(SpecialSauce)                  │
//! │                  └── owns ── Dish "Veggie Pizza"            │
//! │                                                             │
//! │  price       = dish price + Σ add-on deltas                 │
//! │  description = dish description + suffixes in wrap order    │
//! │  name, category pass through unchanged                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//! Each wrap consumes its inner item, so a stack is a single-owner
//! chain of arbitrary depth and cycles are impossible.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The dish categories discount policies target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pizza,
    Burger,
    Chicken,
    Meat,
}

impl Category {
    /// Display label for receipts and notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pizza => "Pizza",
            Category::Burger => "Burger",
            Category::Chicken => "Chicken",
            Category::Meat => "Meat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Menu Item Capability
// =============================================================================

/// The capability set every orderable item exposes.
///
/// All accessors are pure. `description` returns an owned `String`
/// because decorated items assemble theirs from the wrapped chain.
pub trait MenuItem {
    fn name(&self) -> &str;
    fn description(&self) -> String;
    fn price(&self) -> Money;
    fn category(&self) -> Category;
}

// =============================================================================
// Dish
// =============================================================================

/// An immutable base menu item with a fixed catalog price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    description: String,
    price: Money,
    category: Category,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Dish {
            name: name.into(),
            description: description.into(),
            price,
            category,
        }
    }
}

impl MenuItem for Dish {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn price(&self) -> Money {
        self.price
    }

    fn category(&self) -> Category {
        self.category
    }
}

// =============================================================================
// Add-Ons
// =============================================================================

/// Customizations that wrap an item with a price delta and a
/// description suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    ExtraCheese,
    SpecialSauce,
    ExtraToppings,
}

impl AddOn {
    pub fn label(&self) -> &'static str {
        match self {
            AddOn::ExtraCheese => "Extra Cheese",
            AddOn::SpecialSauce => "Special Sauce",
            AddOn::ExtraToppings => "Extra Toppings",
        }
    }

    /// Suffix appended to the wrapped item's description.
    pub fn suffix(&self) -> &'static str {
        match self {
            AddOn::ExtraCheese => ", Extra Cheese",
            AddOn::SpecialSauce => ", Special Sauce",
            AddOn::ExtraToppings => ", Extra Toppings",
        }
    }

    /// Fixed additive price delta.
    pub fn price_delta(&self) -> Money {
        match self {
            AddOn::ExtraCheese => Money::from_cents(200),
            AddOn::SpecialSauce => Money::from_cents(150),
            AddOn::ExtraToppings => Money::from_cents(300),
        }
    }

    /// Wraps an item with this add-on, consuming it.
    pub fn apply(self, item: Box<dyn MenuItem>) -> Box<dyn MenuItem> {
        Box::new(DecoratedItem::new(item, self))
    }
}

// =============================================================================
// Decorated Item
// =============================================================================

/// An item wrapped with one add-on. Wrapping an already decorated item
/// stacks to arbitrary depth.
pub struct DecoratedItem {
    inner: Box<dyn MenuItem>,
    addon: AddOn,
}

impl DecoratedItem {
    /// Takes exclusive ownership of the wrapped item.
    pub fn new(inner: Box<dyn MenuItem>, addon: AddOn) -> Self {
        DecoratedItem { inner, addon }
    }
}

impl MenuItem for DecoratedItem {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> String {
        format!("{}{}", self.inner.description(), self.addon.suffix())
    }

    fn price(&self) -> Money {
        self.inner.price() + self.addon.price_delta()
    }

    fn category(&self) -> Category {
        self.inner.category()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
