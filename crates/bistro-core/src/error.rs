//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Error Types                           │
//! │                                                             │
//! │  bistro-core errors (this file)                             │
//! │  ├── OrderError     - Order and payment preconditions       │
//! │  └── WorkflowError  - OrderError plus transcript I/O        │
//! │                                                             │
//! │  CLI errors (in app)                                        │
//! │  └── SessionError   - What the terminal session reports     │
//! │                                                             │
//! │  Flow: OrderError → WorkflowError → SessionError → user     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Out-of-range menu selections are not represented here: the input
//! boundary recovers them locally with a documented default and they
//! never surface as error values.

use thiserror::Error;

use crate::order::OrderId;

// =============================================================================
// Order Error
// =============================================================================

/// Order and payment precondition failures.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Checkout was attempted with zero items.
    ///
    /// Processing an empty order is not meaningful, so the workflow
    /// refuses before any pricing, payment, or notification side effect.
    #[error("order {order_id} has no items")]
    EmptyOrder { order_id: OrderId },

    /// Order has exceeded maximum allowed items.
    #[error("order cannot hold more than {max} items")]
    TooManyItems { max: usize },

    /// No item at the given position in the order.
    #[error("no item at position {index}")]
    ItemNotFound { index: usize },

    /// Card number left fewer than 4 digits (or non-digits) after
    /// stripping spaces and hyphens. Redaction needs the last 4 digits,
    /// so construction fails fast rather than guessing.
    #[error("card number must contain at least 4 digits")]
    MalformedCardNumber,
}

// =============================================================================
// Workflow Error
// =============================================================================

/// Failures surfaced by the order-processing workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A precondition on the order failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The transcript sink rejected a write.
    #[error("failed to write order transcript: {0}")]
    Transcript(#[from] std::io::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderSequence;

    #[test]
    fn test_error_messages() {
        let seq = OrderSequence::new();
        let err = OrderError::EmptyOrder {
            order_id: seq.next_id(),
        };
        assert_eq!(err.to_string(), "order ORD-1 has no items");

        let err = OrderError::TooManyItems { max: 100 };
        assert_eq!(err.to_string(), "order cannot hold more than 100 items");

        let err = OrderError::ItemNotFound { index: 3 };
        assert_eq!(err.to_string(), "no item at position 3");
    }

    #[test]
    fn test_order_error_converts_to_workflow_error() {
        let err: WorkflowError = OrderError::MalformedCardNumber.into();
        assert!(matches!(err, WorkflowError::Order(_)));
    }
}
