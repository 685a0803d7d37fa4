//! # Catalogs
//!
//! Fixed menu catalogs: themed triples (main, side, drink) and keyed
//! variant tables for custom pizzas and burgers.
//!
//! All constructors are deterministic lookups into fixed tables; they
//! never fail. Unknown variant keys fall back to the "Regular" entry.

use serde::{Deserialize, Serialize};

use crate::menu::{Category, Dish};
use crate::money::Money;

// =============================================================================
// Themed Menus
// =============================================================================

/// A themed menu producing a fixed {main, side, drink} triple.
///
/// The drink rows carry the Chicken category, so the chicken special
/// discounts drinks as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuTheme {
    Vegetarian,
    NonVegetarian,
    Kids,
}

impl MenuTheme {
    pub fn label(&self) -> &'static str {
        match self {
            MenuTheme::Vegetarian => "Vegetarian Menu",
            MenuTheme::NonVegetarian => "Non-Vegetarian Menu",
            MenuTheme::Kids => "Kids Menu",
        }
    }

    /// The theme's main dish, freshly constructed at catalog price.
    pub fn main_dish(&self) -> Dish {
        match self {
            MenuTheme::Vegetarian => Dish::new(
                "Veggie Pizza",
                "Delicious vegetarian pizza",
                Money::from_cents(1299),
                Category::Pizza,
            ),
            MenuTheme::NonVegetarian => Dish::new(
                "Grilled Chicken",
                "Tender grilled chicken",
                Money::from_cents(1599),
                Category::Chicken,
            ),
            MenuTheme::Kids => Dish::new(
                "Kids Burger",
                "Small burger with cheese",
                Money::from_cents(699),
                Category::Burger,
            ),
        }
    }

    /// The theme's side dish.
    pub fn side_dish(&self) -> Dish {
        match self {
            MenuTheme::Vegetarian => Dish::new(
                "Garlic Bread",
                "Fresh garlic bread",
                Money::from_cents(499),
                Category::Pizza,
            ),
            MenuTheme::NonVegetarian => Dish::new(
                "Beef Ribs",
                "Smoky beef ribs",
                Money::from_cents(899),
                Category::Meat,
            ),
            MenuTheme::Kids => Dish::new(
                "Mini Pizza",
                "Small cheese pizza",
                Money::from_cents(599),
                Category::Pizza,
            ),
        }
    }

    /// The theme's drink.
    pub fn drink(&self) -> Dish {
        match self {
            MenuTheme::Vegetarian => Dish::new(
                "Fresh Juice",
                "Organic fruit juice",
                Money::from_cents(399),
                Category::Chicken,
            ),
            MenuTheme::NonVegetarian => Dish::new(
                "Cola",
                "Refreshing cola",
                Money::from_cents(299),
                Category::Chicken,
            ),
            MenuTheme::Kids => Dish::new(
                "Apple Juice",
                "Fresh apple juice",
                Money::from_cents(249),
                Category::Chicken,
            ),
        }
    }
}

// =============================================================================
// Variant Creators
// =============================================================================

/// Parametrized single-item creators with case-insensitive variant keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantCreator {
    Pizza,
    Burger,
}

impl VariantCreator {
    /// Looks up a variant by key. Unrecognized keys fall back to the
    /// "Regular" entry rather than failing.
    pub fn create(&self, variant: &str) -> Dish {
        let key = variant.trim().to_lowercase();
        match self {
            VariantCreator::Pizza => Self::pizza(&key),
            VariantCreator::Burger => Self::burger(&key),
        }
    }

    fn pizza(key: &str) -> Dish {
        let (name, description, cents) = match key {
            "italian" => ("Italian Pizza", "Authentic Italian style", 1499),
            "eastern" => ("Eastern Pizza", "Spicy eastern flavor", 1399),
            "classic" => ("Classic Pizza", "Traditional cheese pizza", 1199),
            _ => ("Regular Pizza", "Standard pizza", 1099),
        };
        Dish::new(name, description, Money::from_cents(cents), Category::Pizza)
    }

    fn burger(key: &str) -> Dish {
        let (name, description, cents) = match key {
            "classic" => ("Classic Burger", "Traditional beef burger", 899),
            "deluxe" => ("Deluxe Burger", "Premium burger with extras", 1299),
            "veggie" => ("Veggie Burger", "Vegetarian burger", 999),
            _ => ("Regular Burger", "Standard burger", 799),
        };
        Dish::new(name, description, Money::from_cents(cents), Category::Burger)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
