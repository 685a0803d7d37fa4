//! # Payment Methods
//!
//! Payment is an acknowledgment in this scope: `pay` always succeeds
//! and yields a timestamped record, never a monetary transfer.
//!
//! Card numbers are redacted at construction. Only the last 4 digits
//! are retained anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OrderError, OrderResult};
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer settles the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment. Holds only the redacted last 4 digits.
    CreditCard { last4: String },
    /// Mobile wallet payment, keyed by wallet id.
    MobileWallet { wallet_id: String },
}

impl PaymentMethod {
    /// Builds a card payment from a raw card number, keeping only the
    /// last 4 digits.
    ///
    /// Spaces and hyphens are stripped first. Fails with
    /// [`OrderError::MalformedCardNumber`] when fewer than 4 characters
    /// remain or any remaining character is not an ASCII digit.
    pub fn credit_card(number: &str) -> OrderResult<Self> {
        let digits: String = number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if digits.len() < 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(OrderError::MalformedCardNumber);
        }

        Ok(PaymentMethod::CreditCard {
            last4: digits[digits.len() - 4..].to_string(),
        })
    }

    pub fn mobile_wallet(wallet_id: impl Into<String>) -> Self {
        PaymentMethod::MobileWallet {
            wallet_id: wallet_id.into(),
        }
    }

    /// Human-readable method label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard { .. } => "Credit Card",
            PaymentMethod::MobileWallet { .. } => "Mobile Wallet",
        }
    }

    /// Acknowledges payment of `amount`. Always succeeds in this scope:
    /// no declines, no retries.
    pub fn pay(&self, amount: Money) -> PaymentRecord {
        PaymentRecord {
            method: self.clone(),
            amount,
            paid_at: Utc::now(),
        }
    }
}

// =============================================================================
// Payment Record
// =============================================================================

/// A snapshot of one payment acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub method: PaymentMethod,
    pub amount: Money,
    pub paid_at: DateTime<Utc>,
}

/// The acknowledgment line printed on the transcript.
impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method {
            PaymentMethod::Cash => write!(f, "Paid {} in Cash", self.amount),
            PaymentMethod::CreditCard { last4 } => write!(
                f,
                "Paid {} using Credit Card ending in {}",
                self.amount, last4
            ),
            PaymentMethod::MobileWallet { wallet_id } => write!(
                f,
                "Paid {} using Mobile Wallet: {}",
                self.amount, wallet_id
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_keeps_only_last4() {
        let card = PaymentMethod::credit_card("4111 1111 1111 3456").unwrap();
        assert_eq!(
            card,
            PaymentMethod::CreditCard {
                last4: "3456".to_string()
            }
        );
        assert_eq!(card.label(), "Credit Card");
    }

    #[test]
    fn test_credit_card_strips_separators() {
        let card = PaymentMethod::credit_card("4111-1111-1111-9010").unwrap();
        assert!(matches!(
            card,
            PaymentMethod::CreditCard { last4 } if last4 == "9010"
        ));
    }

    #[test]
    fn test_malformed_card_numbers_fail_fast() {
        assert!(matches!(
            PaymentMethod::credit_card("123"),
            Err(OrderError::MalformedCardNumber)
        ));
        assert!(matches!(
            PaymentMethod::credit_card(""),
            Err(OrderError::MalformedCardNumber)
        ));
        assert!(matches!(
            PaymentMethod::credit_card("12ab"),
            Err(OrderError::MalformedCardNumber)
        ));
    }

    #[test]
    fn test_pay_records_amount_and_method() {
        let record = PaymentMethod::Cash.pay(Money::from_cents(1104));
        assert_eq!(record.amount, Money::from_cents(1104));
        assert_eq!(record.method, PaymentMethod::Cash);
        assert_eq!(record.to_string(), "Paid $11.04 in Cash");
    }

    #[test]
    fn test_acknowledgment_lines_redact_card() {
        let card = PaymentMethod::credit_card("4111111111113456").unwrap();
        let line = card.pay(Money::from_cents(2178)).to_string();
        assert_eq!(line, "Paid $21.78 using Credit Card ending in 3456");
        assert!(!line.contains("4111"));
    }

    #[test]
    fn test_wallet_acknowledgment() {
        let wallet = PaymentMethod::mobile_wallet("wallet-42");
        let line = wallet.pay(Money::from_cents(500)).to_string();
        assert_eq!(line, "Paid $5.00 using Mobile Wallet: wallet-42");
        assert_eq!(wallet.label(), "Mobile Wallet");
    }
}
