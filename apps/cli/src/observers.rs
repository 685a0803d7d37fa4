//! # Order Observers
//!
//! The external collaborators notified once an order completes: the
//! kitchen display (what to prepare) and the waiter pad (who and
//! where). Both print their notification to the terminal and log the
//! event.

use bistro_core::{Order, OrderObserver};
use tracing::info;

/// Kitchen display: lists the items to prepare.
pub struct KitchenSystem;

impl OrderObserver for KitchenSystem {
    fn update(&self, order: &Order) {
        println!();
        println!("[KITCHEN] New order received!");
        println!("Order ID: {}", order.id());
        println!("Items to prepare:");
        for item in order.items() {
            println!("  - {}", item.name());
        }
        info!(order_id = %order.id(), items = order.item_count(), "kitchen notified");
    }
}

/// Waiter pad: shows who ordered and how it goes out.
pub struct WaiterSystem;

impl OrderObserver for WaiterSystem {
    fn update(&self, order: &Order) {
        println!();
        println!("[WAITER] New order notification!");
        println!("Order ID: {}", order.id());
        println!("Table/Customer: {}", order.customer());
        println!("Order Type: {}", order.order_type());
        info!(order_id = %order.id(), "waiter notified");
    }
}
