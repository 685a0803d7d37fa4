//! # Order Aggregate
//!
//! One customer's order for one checkout session: the item sequence,
//! pricing math, and the observers notified when the order completes.
//!
//! ## Invariants
//! - Items keep insertion order; duplicates are allowed (two of the
//!   same dish are two lines)
//! - `subtotal = Σ item price`, `discount = Σ per-item policy amount`,
//!   `total = subtotal - discount` (non-negative because every
//!   per-item discount is bounded by the item price)
//! - Observers fire synchronously, in attachment order, and only read
//!   order state
//! - Order ids come from an explicit allocator and are unique and
//!   strictly increasing for its lifetime

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::discount::DiscountPolicy;
use crate::error::{OrderError, OrderResult};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::MAX_ORDER_ITEMS;

// =============================================================================
// Order Identity
// =============================================================================

/// A sequential order identity, displayed as `ORD-<n>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD-{}", self.0)
    }
}

/// Allocates order ids from a monotonic counter starting at zero.
///
/// The counter is atomic so no two orders could share an id even if
/// construction ever moved off a single thread. The first allocated id
/// is `ORD-1`.
#[derive(Debug, Default)]
pub struct OrderSequence {
    next: AtomicU64,
}

impl OrderSequence {
    pub const fn new() -> Self {
        OrderSequence {
            next: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> OrderId {
        OrderId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

// =============================================================================
// Order Type
// =============================================================================

/// How the order will be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    DineIn,
    Delivery,
    Takeaway,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::DineIn => "Dine-In",
            OrderType::Delivery => "Delivery",
            OrderType::Takeaway => "Takeaway",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Observers
// =============================================================================

/// An external collaborator notified once per completed order.
///
/// Implementations read order state; they must not mutate it.
pub trait OrderObserver {
    fn update(&self, order: &Order);
}

// =============================================================================
// Order
// =============================================================================

/// The aggregate for one checkout session.
pub struct Order {
    id: OrderId,
    customer: String,
    order_type: OrderType,
    items: Vec<Box<dyn MenuItem>>,
    observers: Vec<Box<dyn OrderObserver>>,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: OrderId, customer: impl Into<String>, order_type: OrderType) -> Self {
        Order {
            id,
            customer: customer.into(),
            order_type,
            items: Vec::new(),
            observers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // -------------------------------------------------------------------------
    // Item management
    // -------------------------------------------------------------------------

    /// Appends an item. Duplicates are allowed; insertion order is kept.
    pub fn add_item(&mut self, item: Box<dyn MenuItem>) -> OrderResult<()> {
        if self.items.len() >= MAX_ORDER_ITEMS {
            return Err(OrderError::TooManyItems {
                max: MAX_ORDER_ITEMS,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the item at `index`.
    pub fn remove_item(&mut self, index: usize) -> OrderResult<Box<dyn MenuItem>> {
        if index >= self.items.len() {
            return Err(OrderError::ItemNotFound { index });
        }
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[Box<dyn MenuItem>] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Sum of item prices.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Sum of per-item discounts under `policy`.
    pub fn discount_total(&self, policy: DiscountPolicy) -> Money {
        self.items
            .iter()
            .map(|item| policy.amount_off(item.price(), item.category()))
            .sum()
    }

    /// Subtotal minus discount.
    pub fn total(&self, policy: DiscountPolicy) -> Money {
        self.subtotal() - self.discount_total(policy)
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Attaches an observer. Attachment order is notification order.
    pub fn attach(&mut self, observer: Box<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    /// Detaches and returns the observer at `index`.
    pub fn detach(&mut self, index: usize) -> Option<Box<dyn OrderObserver>> {
        if index < self.observers.len() {
            Some(self.observers.remove(index))
        } else {
            None
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Notifies every attached observer synchronously, in attachment
    /// order. The workflow calls this exactly once per completed order.
    pub fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update(self);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Category, Dish};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn burger() -> Dish {
        Dish::new(
            "Classic Burger",
            "Traditional beef burger",
            Money::from_cents(899),
            Category::Burger,
        )
    }

    fn chicken() -> Dish {
        Dish::new(
            "Grilled Chicken",
            "Tender grilled chicken",
            Money::from_cents(1599),
            Category::Chicken,
        )
    }

    fn order_with(seq: &OrderSequence, dishes: Vec<Dish>) -> Order {
        let mut order = Order::new(seq.next_id(), "Alice", OrderType::DineIn);
        for dish in dishes {
            order.add_item(Box::new(dish)).unwrap();
        }
        order
    }

    /// Records every notification it receives.
    struct RecordingObserver {
        tag: &'static str,
        log: Rc<RefCell<Vec<(&'static str, OrderId, usize)>>>,
    }

    impl OrderObserver for RecordingObserver {
        fn update(&self, order: &Order) {
            self.log
                .borrow_mut()
                .push((self.tag, order.id(), order.item_count()));
        }
    }

    #[test]
    fn test_ids_are_distinct_and_increasing() {
        let seq = OrderSequence::new();
        let a = seq.next_id();
        let b = seq.next_id();
        let c = seq.next_id();
        assert!(a < b && b < c);
        assert_eq!(a.to_string(), "ORD-1");
        assert_eq!(c.value(), 3);
    }

    #[test]
    fn test_subtotal_discount_total() {
        // $8.99 burger + $15.99 chicken under the chicken special:
        // discount = 0 + 3.198, total = 24.98 - 3.198 = 21.782
        let seq = OrderSequence::new();
        let order = order_with(&seq, vec![burger(), chicken()]);

        assert_eq!(order.subtotal(), Money::from_cents(2498));

        let discount = order.discount_total(DiscountPolicy::ChickenSpecial);
        assert_eq!(discount.amount(), "3.198".parse().unwrap());

        let total = order.total(DiscountPolicy::ChickenSpecial);
        assert_eq!(total.amount(), "21.782".parse().unwrap());
    }

    #[test]
    fn test_total_equals_subtotal_minus_discount_for_every_policy() {
        let seq = OrderSequence::new();
        let order = order_with(&seq, vec![burger(), chicken(), burger()]);

        for policy in [
            DiscountPolicy::PizzaSpecial,
            DiscountPolicy::ChickenSpecial,
            DiscountPolicy::MeatSpecial,
            DiscountPolicy::None,
        ] {
            assert_eq!(
                order.total(policy),
                order.subtotal() - order.discount_total(policy)
            );
            assert!(order.total(policy) >= Money::zero());
        }
    }

    #[test]
    fn test_duplicates_are_kept_as_separate_lines() {
        let seq = OrderSequence::new();
        let order = order_with(&seq, vec![burger(), burger()]);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.subtotal(), Money::from_cents(1798));
    }

    #[test]
    fn test_remove_item() {
        let seq = OrderSequence::new();
        let mut order = order_with(&seq, vec![burger(), chicken()]);

        let removed = order.remove_item(0).unwrap();
        assert_eq!(removed.name(), "Classic Burger");
        assert_eq!(order.item_count(), 1);

        assert!(matches!(
            order.remove_item(5),
            Err(OrderError::ItemNotFound { index: 5 })
        ));
    }

    #[test]
    fn test_item_cap() {
        let seq = OrderSequence::new();
        let mut order = Order::new(seq.next_id(), "Bob", OrderType::Takeaway);
        for _ in 0..MAX_ORDER_ITEMS {
            order.add_item(Box::new(burger())).unwrap();
        }
        assert!(matches!(
            order.add_item(Box::new(burger())),
            Err(OrderError::TooManyItems { .. })
        ));
    }

    #[test]
    fn test_observers_fire_once_in_attachment_order() {
        let seq = OrderSequence::new();
        let mut order = order_with(&seq, vec![burger(), chicken()]);
        let log = Rc::new(RefCell::new(Vec::new()));

        order.attach(Box::new(RecordingObserver {
            tag: "kitchen",
            log: Rc::clone(&log),
        }));
        order.attach(Box::new(RecordingObserver {
            tag: "waiter",
            log: Rc::clone(&log),
        }));

        order.notify_observers();

        let entries = log.borrow();
        assert_eq!(
            *entries,
            vec![("kitchen", order.id(), 2), ("waiter", order.id(), 2)]
        );
        // Item list unchanged after notification
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_detach_stops_notifications() {
        let seq = OrderSequence::new();
        let mut order = order_with(&seq, vec![burger()]);
        let log = Rc::new(RefCell::new(Vec::new()));

        order.attach(Box::new(RecordingObserver {
            tag: "kitchen",
            log: Rc::clone(&log),
        }));
        order.attach(Box::new(RecordingObserver {
            tag: "waiter",
            log: Rc::clone(&log),
        }));

        assert!(order.detach(0).is_some());
        assert_eq!(order.observer_count(), 1);

        order.notify_observers();
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].0, "waiter");

        assert!(order.detach(7).is_none());
    }
}
