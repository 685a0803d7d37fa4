//! # Ordering Session
//!
//! Drives one customer through a full order: selections, item
//! building, checkout, and the processing workflow.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  name → order type → menu theme → item loop (+ add-ons)     │
//! │       → discount → payment → fulfillment detail             │
//! │       → process_order (transcript) → thank you              │
//! │                                                             │
//! │  Empty item list: session ends, the processor never runs.   │
//! │  Out-of-range selections: documented default, logged.       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything goes through the `Prompter` boundary, so a whole session
//! can be scripted in tests.

use std::io::{BufRead, Write};

use bistro_core::{
    process_order, AddOn, DiscountPolicy, Fulfillment, MenuItem, MenuTheme, Order, OrderError,
    OrderSequence, OrderType, PaymentMethod, Receipt, VariantCreator, WorkflowError,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::observers::{KitchenSystem, WaiterSystem};
use crate::prompt::Prompter;

const BANNER_WIDTH: usize = 60;

/// Failures that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("failed to export receipt: {0}")]
    Export(#[from] serde_json::Error),
}

/// One interactive ordering session.
pub struct Session<R, W> {
    prompt: Prompter<R, W>,
    orders: OrderSequence,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompt: Prompter<R, W>, orders: OrderSequence, config: AppConfig) -> Self {
        Session {
            prompt,
            orders,
            config,
        }
    }

    /// Runs one full order. Returns `None` when the customer added no
    /// items and the session ended without invoking the processor.
    pub fn run(&mut self) -> Result<Option<Receipt>, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(out, "   WELCOME TO THE BISTRO ORDERING & BILLING SYSTEM")?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(out)?;

        let customer = self.prompt.line("Enter customer name: ")?;
        let order_type = self.select_order_type()?;

        let mut order = Order::new(self.orders.next_id(), customer, order_type);
        order.attach(Box::new(KitchenSystem));
        order.attach(Box::new(WaiterSystem));
        info!(
            order_id = %order.id(),
            customer = order.customer(),
            %order_type,
            created_at = %order.created_at(),
            "order created"
        );

        let theme = self.select_menu_theme()?;
        info!(theme = theme.label(), "menu selected");
        self.build_items(&mut order, theme)?;

        if order.is_empty() {
            writeln!(self.prompt.writer())?;
            writeln!(self.prompt.writer(), "No items added. Order cancelled.")?;
            info!(order_id = %order.id(), "order cancelled with no items");
            return Ok(None);
        }

        let policy = self.select_discount()?;
        let payment = self.select_payment()?;
        let fulfillment = self.ask_fulfillment(order_type)?;

        let receipt = process_order(&order, &fulfillment, policy, &payment, self.prompt.writer())?;
        info!(order_id = %order.id(), total = %receipt.total, "order processed");

        writeln!(self.prompt.writer())?;
        writeln!(self.prompt.writer(), "Thank you for your order!")?;

        if self.config.receipt_json {
            let json = serde_json::to_string_pretty(&receipt)?;
            writeln!(self.prompt.writer())?;
            writeln!(self.prompt.writer(), "{json}")?;
        }

        Ok(Some(receipt))
    }

    // -------------------------------------------------------------------------
    // Selections (out-of-range input takes the default arm)
    // -------------------------------------------------------------------------

    fn select_order_type(&mut self) -> Result<OrderType, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "Select Order Type:")?;
        writeln!(out, "1. Dine-In")?;
        writeln!(out, "2. Delivery")?;
        writeln!(out, "3. Takeaway")?;

        Ok(match self.prompt.choice("Enter choice (1-3): ")? {
            1 => OrderType::DineIn,
            2 => OrderType::Delivery,
            3 => OrderType::Takeaway,
            other => {
                warn!(choice = other, "unknown order type, defaulting to Dine-In");
                OrderType::DineIn
            }
        })
    }

    fn select_menu_theme(&mut self) -> Result<MenuTheme, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "Select Menu Type:")?;
        writeln!(out, "1. Vegetarian Menu")?;
        writeln!(out, "2. Non-Vegetarian Menu")?;
        writeln!(out, "3. Kids Menu")?;

        Ok(match self.prompt.choice("Enter choice (1-3): ")? {
            1 => MenuTheme::Vegetarian,
            2 => MenuTheme::NonVegetarian,
            3 => MenuTheme::Kids,
            other => {
                warn!(choice = other, "unknown menu type, defaulting to Vegetarian");
                MenuTheme::Vegetarian
            }
        })
    }

    fn build_items(&mut self, order: &mut Order, theme: MenuTheme) -> Result<(), SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "=== MENU OPTIONS ===")?;
        writeln!(out, "1. Main Dish")?;
        writeln!(out, "2. Side Dish")?;
        writeln!(out, "3. Drink")?;
        writeln!(out, "4. Custom Pizza")?;
        writeln!(out, "5. Custom Burger")?;

        loop {
            writeln!(self.prompt.writer())?;
            let choice = self
                .prompt
                .choice("Select item to add (1-5, or 0 to finish): ")?;

            let item: Box<dyn MenuItem> = match choice {
                0 => break,
                1 => Box::new(theme.main_dish()),
                2 => Box::new(theme.side_dish()),
                3 => Box::new(theme.drink()),
                4 => Box::new(self.create_variant(VariantCreator::Pizza)?),
                5 => Box::new(self.create_variant(VariantCreator::Burger)?),
                other => {
                    warn!(choice = other, "unknown item choice, nothing added");
                    continue;
                }
            };

            let item = self.customize(item)?;
            writeln!(
                self.prompt.writer(),
                "Added: {} - {}",
                item.name(),
                item.price()
            )?;
            info!(item = item.name(), price = %item.price(), "item added");
            order.add_item(item)?;
        }

        Ok(())
    }

    fn create_variant(&mut self, creator: VariantCreator) -> Result<bistro_core::Dish, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        let variants = match creator {
            VariantCreator::Pizza => {
                writeln!(out, "Select Pizza variant:")?;
                ["italian", "eastern", "classic"]
            }
            VariantCreator::Burger => {
                writeln!(out, "Select Burger variant:")?;
                ["classic", "deluxe", "veggie"]
            }
        };
        for (i, variant) in variants.iter().enumerate() {
            let mut label: Vec<char> = variant.chars().collect();
            label[0] = label[0].to_ascii_uppercase();
            let label: String = label.into_iter().collect();
            writeln!(out, "{}. {label}", i + 1)?;
        }

        let key = match self.prompt.choice("Enter choice: ")? {
            n @ 1..=3 => variants[(n - 1) as usize],
            _ => "regular",
        };
        Ok(creator.create(key))
    }

    fn customize(&mut self, item: Box<dyn MenuItem>) -> Result<Box<dyn MenuItem>, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "Add customizations?")?;
        writeln!(out, "1. Extra Cheese (+{})", AddOn::ExtraCheese.price_delta())?;
        writeln!(out, "2. Special Sauce (+{})", AddOn::SpecialSauce.price_delta())?;
        writeln!(out, "3. Extra Toppings (+{})", AddOn::ExtraToppings.price_delta())?;
        writeln!(out, "4. No customization")?;

        let addon = match self.prompt.choice("Enter choice (1-4): ")? {
            1 => Some(AddOn::ExtraCheese),
            2 => Some(AddOn::SpecialSauce),
            3 => Some(AddOn::ExtraToppings),
            _ => None,
        };

        Ok(match addon {
            Some(addon) => {
                info!(addon = addon.label(), "customization added");
                addon.apply(item)
            }
            None => item,
        })
    }

    fn select_discount(&mut self) -> Result<DiscountPolicy, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "Select Discount Option:")?;
        writeln!(out, "1. Pizza Discount (15% off pizza items)")?;
        writeln!(out, "2. Chicken Discount (20% off chicken items)")?;
        writeln!(out, "3. Meat Discount (10% off meat items)")?;
        writeln!(out, "4. No Discount")?;

        Ok(match self.prompt.choice("Enter choice (1-4): ")? {
            1 => DiscountPolicy::PizzaSpecial,
            2 => DiscountPolicy::ChickenSpecial,
            3 => DiscountPolicy::MeatSpecial,
            _ => DiscountPolicy::None,
        })
    }

    fn select_payment(&mut self) -> Result<PaymentMethod, SessionError> {
        let out = self.prompt.writer();
        writeln!(out)?;
        writeln!(out, "Select Payment Method:")?;
        writeln!(out, "1. Cash")?;
        writeln!(out, "2. Credit Card")?;
        writeln!(out, "3. Mobile Wallet")?;

        let payment = match self.prompt.choice("Enter choice (1-3): ")? {
            2 => {
                let number = self.prompt.line("Enter card number: ")?;
                PaymentMethod::credit_card(&number)?
            }
            3 => {
                let wallet_id = self.prompt.line("Enter wallet ID: ")?;
                PaymentMethod::mobile_wallet(wallet_id)
            }
            _ => PaymentMethod::Cash,
        };
        info!(method = payment.label(), "payment method selected");
        Ok(payment)
    }

    fn ask_fulfillment(&mut self, order_type: OrderType) -> Result<Fulfillment, SessionError> {
        Ok(match order_type {
            OrderType::DineIn => Fulfillment::DineIn {
                table: self.prompt.line("Enter table number: ")?,
            },
            OrderType::Delivery => Fulfillment::Delivery {
                address: self.prompt.line("Enter delivery address: ")?,
            },
            OrderType::Takeaway => Fulfillment::Takeaway {
                pickup_time: self.prompt.line("Enter pickup time (e.g., 6:30 PM): ")?,
            },
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::Money;
    use std::io::Cursor;

    fn scripted(script: &str) -> Session<Cursor<String>, Vec<u8>> {
        Session::new(
            Prompter::new(Cursor::new(script.to_string()), Vec::new()),
            OrderSequence::new(),
            AppConfig::default(),
        )
    }

    fn output(session: &mut Session<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(session.prompt.writer().clone()).unwrap()
    }

    #[test]
    fn test_full_dine_in_session() {
        // Alice, dine-in, vegetarian menu, one main dish, no add-on,
        // pizza discount, cash, table 5
        let mut session = scripted("Alice\n1\n1\n1\n4\n0\n1\n1\n5\n");
        let receipt = session.run().unwrap().expect("order should complete");

        assert_eq!(receipt.customer, "Alice");
        assert_eq!(receipt.order_type, OrderType::DineIn);
        assert_eq!(receipt.subtotal, Money::from_cents(1299));
        assert_eq!(receipt.total.amount(), "11.0415".parse().unwrap());

        let transcript = output(&mut session);
        let mut last = 0;
        for marker in [
            "WELCOME TO THE BISTRO",
            "[VERIFICATION]",
            "[DINE-IN]",
            "[PRICING]",
            "[PAYMENT]",
            "[NOTIFY]",
            "[FINALIZATION]",
            "Thank you for your order!",
        ] {
            let at = transcript[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing {marker}"));
            last += at;
        }
        assert!(transcript.contains("Order will be served at Table 5"));
        assert!(transcript.contains("Total: $11.04"));
    }

    #[test]
    fn test_empty_order_skips_the_processor() {
        let mut session = scripted("Bob\n1\n1\n0\n");
        assert!(session.run().unwrap().is_none());

        let transcript = output(&mut session);
        assert!(transcript.contains("No items added. Order cancelled."));
        assert!(!transcript.contains("[VERIFICATION]"));
        assert!(!transcript.contains("[PAYMENT]"));
    }

    #[test]
    fn test_out_of_range_selections_take_defaults() {
        // Order type 9 -> Dine-In, menu 9 -> Vegetarian, pizza variant
        // 9 -> regular, add-on 9 -> none, discount 9 -> none, payment
        // 9 -> cash
        let mut session = scripted("Eve\n9\n9\n4\n9\n9\n0\n9\n9\n7\n");
        let receipt = session.run().unwrap().unwrap();

        assert_eq!(receipt.order_type, OrderType::DineIn);
        assert_eq!(receipt.lines[0].description, "Standard pizza");
        assert_eq!(receipt.subtotal, Money::from_cents(1099));
        assert_eq!(receipt.discount_label, "No Discount");
        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(receipt.payment.method, PaymentMethod::Cash);
    }

    #[test]
    fn test_deluxe_burger_with_extra_cheese_takeaway() {
        // Takeaway, kids menu shown but a custom deluxe burger ordered,
        // extra cheese, chicken discount (matches nothing), wallet
        let mut session = scripted("Fay\n3\n3\n5\n2\n1\n0\n2\n3\nw-1\n6:30 PM\n");
        let receipt = session.run().unwrap().unwrap();

        assert_eq!(receipt.order_type, OrderType::Takeaway);
        assert_eq!(receipt.lines.len(), 1);
        assert!(receipt.lines[0].description.ends_with(", Extra Cheese"));
        assert_eq!(receipt.subtotal, Money::from_cents(1499)); // 12.99 + 2.00
        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(
            receipt.payment.method,
            PaymentMethod::mobile_wallet("w-1")
        );

        let transcript = output(&mut session);
        assert!(transcript.contains("Order will be ready for pickup at: 6:30 PM"));
        assert!(transcript.contains("Paid $14.99 using Mobile Wallet: w-1"));
    }

    #[test]
    fn test_malformed_card_number_ends_the_session() {
        let mut session = scripted("Dan\n1\n1\n1\n4\n0\n4\n2\nxx\n");
        let err = session.run().unwrap_err();
        assert!(matches!(
            err,
            SessionError::Order(OrderError::MalformedCardNumber)
        ));

        // Processing never started
        assert!(!output(&mut session).contains("[VERIFICATION]"));
    }

    #[test]
    fn test_unknown_item_choice_adds_nothing() {
        // Item choice 7 is skipped, then a drink is added
        let mut session = scripted("Gil\n2\n2\n7\n3\n4\n0\n4\n1\n12 Elm St\n");
        let receipt = session.run().unwrap().unwrap();

        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].price, Money::from_cents(299)); // Cola
        assert_eq!(receipt.order_type, OrderType::Delivery);
    }
}
