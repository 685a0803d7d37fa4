//! # Order Processing Workflow
//!
//! The fixed-step sequence that turns a populated order into a
//! finalized, paid, notified one.
//!
//! ## Step Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Verify → TypeSpecific → Price → Pay → Notify → Finalize    │
//! │                                                             │
//! │  One fixed algorithm for every order type; the only varying │
//! │  step is TypeSpecific, dispatched on the Fulfillment enum.  │
//! │  No branching back, no retries. Verify rejects an empty     │
//! │  order before any later step can run.                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The transcript is written line by line to an injected sink; the
//! caller gets a [`Receipt`] snapshot of everything that was priced,
//! paid, and confirmed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::discount::DiscountPolicy;
use crate::error::{OrderError, WorkflowError};
use crate::money::Money;
use crate::order::{Order, OrderId, OrderType};
use crate::payment::{PaymentMethod, PaymentRecord};

const RULE_WIDTH: usize = 60;
const DESCRIPTION_COLUMN: usize = 40;

// =============================================================================
// Fulfillment
// =============================================================================

/// The one piece of type-specific information each order type needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fulfillment {
    DineIn { table: String },
    Delivery { address: String },
    Takeaway { pickup_time: String },
}

impl Fulfillment {
    pub fn order_type(&self) -> OrderType {
        match self {
            Fulfillment::DineIn { .. } => OrderType::DineIn,
            Fulfillment::Delivery { .. } => OrderType::Delivery,
            Fulfillment::Takeaway { .. } => OrderType::Takeaway,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One priced line on the receipt: the full (possibly decorated)
/// description and its price, frozen at processing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub description: String,
    pub price: Money,
}

/// Snapshot of a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: OrderId,
    pub customer: String,
    pub order_type: OrderType,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub discount_label: String,
    pub discount: Money,
    pub total: Money,
    pub payment: PaymentRecord,
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Workflow Entry Point
// =============================================================================

/// Processes one order through the fixed step sequence, writing the
/// transcript to `out`.
///
/// The same `policy` prices both the discount and the total, and the
/// returned receipt is the exact data that was written.
///
/// ## Errors
/// - [`OrderError::EmptyOrder`] when the order has no items; nothing
///   is priced, paid, or notified in that case
/// - [`WorkflowError::Transcript`] when the sink rejects a write
pub fn process_order(
    order: &Order,
    fulfillment: &Fulfillment,
    policy: DiscountPolicy,
    payment: &PaymentMethod,
    out: &mut dyn Write,
) -> Result<Receipt, WorkflowError> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "   PROCESSING ORDER")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    verify_order(order, out)?;
    confirm_fulfillment(fulfillment, out)?;
    let (lines, subtotal, discount, total) = price_order(order, policy, out)?;
    let record = process_payment(payment, total, out)?;
    notify(order, out)?;
    finalize(order.id(), out)?;

    Ok(Receipt {
        order_id: order.id(),
        customer: order.customer().to_string(),
        order_type: order.order_type(),
        lines,
        subtotal,
        discount_label: policy.label().to_string(),
        discount,
        total,
        payment: record,
        completed_at: Utc::now(),
    })
}

// =============================================================================
// Steps
// =============================================================================

/// Hard precondition: an order with no items never reaches pricing,
/// payment, or notification.
fn verify_order(order: &Order, out: &mut dyn Write) -> Result<(), WorkflowError> {
    writeln!(out)?;
    writeln!(out, "[VERIFICATION] Verifying order items...")?;
    if order.is_empty() {
        return Err(OrderError::EmptyOrder {
            order_id: order.id(),
        }
        .into());
    }
    writeln!(out, "Order verified: {} items found.", order.item_count())?;
    Ok(())
}

/// The single type-specific step. Confirmation only: no item or price
/// mutation happens here.
fn confirm_fulfillment(fulfillment: &Fulfillment, out: &mut dyn Write) -> Result<(), WorkflowError> {
    writeln!(out)?;
    match fulfillment {
        Fulfillment::DineIn { table } => {
            writeln!(out, "[DINE-IN] Processing dine-in order...")?;
            writeln!(out, "Order will be served at Table {table}")?;
        }
        Fulfillment::Delivery { address } => {
            writeln!(out, "[DELIVERY] Processing delivery order...")?;
            writeln!(out, "Order will be delivered to: {address}")?;
            writeln!(out, "Estimated delivery time: 30-45 minutes")?;
        }
        Fulfillment::Takeaway { pickup_time } => {
            writeln!(out, "[TAKEAWAY] Processing takeaway order...")?;
            writeln!(out, "Order will be ready for pickup at: {pickup_time}")?;
            writeln!(out, "Please collect from the counter.")?;
        }
    }
    Ok(())
}

type PricedLines = (Vec<ReceiptLine>, Money, Money, Money);

fn price_order(
    order: &Order,
    policy: DiscountPolicy,
    out: &mut dyn Write,
) -> Result<PricedLines, WorkflowError> {
    writeln!(out)?;
    writeln!(out, "[PRICING] Calculating order total...")?;
    writeln!(out, "Order ID: {}", order.id())?;
    writeln!(out, "Customer: {}", order.customer())?;
    writeln!(out)?;
    writeln!(out, "Items:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut lines = Vec::with_capacity(order.item_count());
    for item in order.items() {
        let line = ReceiptLine {
            description: item.description(),
            price: item.price(),
        };
        writeln!(
            out,
            "{:<width$} {}",
            line.description,
            line.price,
            width = DESCRIPTION_COLUMN
        )?;
        lines.push(line);
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    let subtotal = order.subtotal();
    let discount = order.discount_total(policy);
    let total = order.total(policy);

    writeln!(out, "Subtotal: {subtotal}")?;
    writeln!(out, "Discount ({}): -{discount}", policy.label())?;
    writeln!(out, "Total: {total}")?;

    Ok((lines, subtotal, discount, total))
}

fn process_payment(
    payment: &PaymentMethod,
    total: Money,
    out: &mut dyn Write,
) -> Result<PaymentRecord, WorkflowError> {
    writeln!(out)?;
    writeln!(out, "[PAYMENT] Processing payment...")?;
    let record = payment.pay(total);
    writeln!(out, "{record}")?;
    writeln!(out, "Payment completed successfully!")?;
    Ok(record)
}

fn notify(order: &Order, out: &mut dyn Write) -> Result<(), WorkflowError> {
    writeln!(out)?;
    writeln!(
        out,
        "[NOTIFY] Notifying {} observers...",
        order.observer_count()
    )?;
    order.notify_observers();
    Ok(())
}

fn finalize(order_id: OrderId, out: &mut dyn Write) -> Result<(), WorkflowError> {
    writeln!(out)?;
    writeln!(out, "[FINALIZATION] Order finalized!")?;
    writeln!(out, "Order ID: {order_id}")?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
