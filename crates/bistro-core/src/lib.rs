//! # bistro-core: Pure Business Logic for Bistro
//!
//! This crate is the **heart** of Bistro. It contains the ordering and
//! billing model as pure logic with no direct I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Bistro Architecture                     │
//! │                                                             │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │                 apps/cli (terminal)                 │    │
//! │  │   prompts ──► selections ──► observers ──► output   │    │
//! │  └──────────────────────────┬──────────────────────────┘    │
//! │                             │                               │
//! │  ┌──────────────────────────▼──────────────────────────┐    │
//! │  │             ★ bistro-core (THIS CRATE) ★            │    │
//! │  │                                                     │    │
//! │  │  ┌────────┐ ┌─────────┐ ┌──────────┐ ┌──────────┐   │    │
//! │  │  │  menu  │ │ catalog │ │ discount │ │ payment  │   │    │
//! │  │  │ items, │ │ themes, │ │ policies │ │ methods, │   │    │
//! │  │  │ addons │ │ variants│ │          │ │ records  │   │    │
//! │  │  └────────┘ └─────────┘ └──────────┘ └──────────┘   │    │
//! │  │  ┌────────┐ ┌─────────┐ ┌──────────────────────┐    │    │
//! │  │  │ money  │ │  order  │ │       workflow       │    │    │
//! │  │  └────────┘ └─────────┘ └──────────────────────┘    │    │
//! │  │                                                     │    │
//! │  │  NO TERMINAL • NO NETWORK • TRANSCRIPT VIA SINK     │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal money and discount rates
//! - [`menu`] - Menu items, categories, and add-on decoration
//! - [`catalog`] - Themed menus and keyed variant creators
//! - [`discount`] - Per-item discount policies
//! - [`payment`] - Payment methods and acknowledgment records
//! - [`order`] - The order aggregate, id allocation, observers
//! - [`workflow`] - The fixed-step order processing sequence
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{
//!     DiscountPolicy, Fulfillment, MenuTheme, Order, OrderSequence, OrderType, PaymentMethod,
//!     process_order,
//! };
//!
//! let orders = OrderSequence::new();
//! let mut order = Order::new(orders.next_id(), "Alice", OrderType::DineIn);
//! order.add_item(Box::new(MenuTheme::Vegetarian.main_dish()))?;
//!
//! let mut transcript = Vec::new();
//! let receipt = process_order(
//!     &order,
//!     &Fulfillment::DineIn { table: "5".into() },
//!     DiscountPolicy::PizzaSpecial,
//!     &PaymentMethod::Cash,
//!     &mut transcript,
//! )?;
//!
//! assert_eq!(receipt.total.amount(), "11.0415".parse().unwrap());
//! # Ok::<(), bistro_core::error::WorkflowError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod workflow;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{MenuTheme, VariantCreator};
pub use discount::DiscountPolicy;
pub use error::{OrderError, OrderResult, WorkflowError};
pub use menu::{AddOn, Category, Dish, MenuItem};
pub use money::{DiscountRate, Money};
pub use order::{Order, OrderId, OrderObserver, OrderSequence, OrderType};
pub use payment::{PaymentMethod, PaymentRecord};
pub use workflow::{process_order, Fulfillment, Receipt, ReceiptLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single order.
///
/// Prevents runaway orders from an unattended input loop.
pub const MAX_ORDER_ITEMS: usize = 100;
