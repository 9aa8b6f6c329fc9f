//! # Order Session
//!
//! The cart-building state machine driven by one operator line at a time.
//!
//! ```text
//! Collecting ──checkout──▶ ConfirmCheckout ──yes──▶ Committed (Cancelled if the cart is empty)
//! Collecting ──cancel────▶ ConfirmCancel   ──yes──▶ Cancelled
//! ConfirmCheckout | ConfirmCancel ──no──▶ Collecting
//! ```
//!
//! The session only validates and collects. When checkout is confirmed it
//! hands the cart back in [`SessionStep::Checkout`] and the caller performs the
//! commit (see [`checkout`](crate::checkout)).

pub mod command;
pub mod error;

pub use command::*;
pub use error::*;

use crate::inventory::StockView;
use crate::model::{Cart, CartError, CustomerInfo, ItemKey};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    ConfirmCheckout,
    ConfirmCancel,
    Committed,
    Cancelled,
}

/// What happened in response to one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    /// Blank line in the collecting state.
    Ignored,
    /// The cart now holds `pending` units of `key`.
    Added { key: ItemKey, quantity: u32, pending: u32 },
    Rejected(Rejection),
    /// The operator asked to see the cart.
    ShowCart,
    /// Waiting for a yes/no on checkout.
    ConfirmCheckout,
    /// Waiting for a yes/no on cancel.
    ConfirmCancel,
    /// The confirmation answer was neither yes nor no.
    Reprompt,
    /// Confirmation declined, back to collecting.
    Resumed,
    /// Checkout confirmed with a non-empty cart; the caller must commit it.
    Checkout(Cart),
    /// Checkout confirmed with nothing in the cart; no order is created.
    EmptyCart,
    Cancelled,
    /// The session already ended.
    Closed,
}

#[derive(Debug)]
pub struct OrderSession {
    customer: CustomerInfo,
    state: SessionState,
    cart: Cart,
}

impl OrderSession {
    pub fn new(customer: CustomerInfo) -> Self {
        Self {
            customer,
            state: SessionState::Collecting,
            cart: Cart::new(),
        }
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Committed | SessionState::Cancelled)
    }

    /// Feeds one line of operator input, validating item requests against `stock`.
    pub fn handle(&mut self, input: &str, stock: &impl StockView) -> SessionStep {
        let step = match self.state {
            SessionState::Collecting => self.collect(input, stock),
            SessionState::ConfirmCheckout => match parse_confirmation(input) {
                Some(Confirmation::Yes) => self.finish_checkout(),
                Some(Confirmation::No) => self.resume(),
                None => SessionStep::Reprompt,
            },
            SessionState::ConfirmCancel => match parse_confirmation(input) {
                Some(Confirmation::Yes) => {
                    self.cart = Cart::new();
                    self.state = SessionState::Cancelled;
                    SessionStep::Cancelled
                }
                Some(Confirmation::No) => self.resume(),
                None => SessionStep::Reprompt,
            },
            SessionState::Committed | SessionState::Cancelled => SessionStep::Closed,
        };
        debug!(state = ?self.state, ?step, "Session input handled");
        step
    }

    fn collect(&mut self, input: &str, stock: &impl StockView) -> SessionStep {
        let command = match parse_command(input) {
            Ok(command) => command,
            Err(rejection) => return SessionStep::Rejected(rejection),
        };
        match command {
            Command::Empty => SessionStep::Ignored,
            Command::ShowCart => SessionStep::ShowCart,
            Command::Checkout => {
                self.state = SessionState::ConfirmCheckout;
                SessionStep::ConfirmCheckout
            }
            Command::Cancel => {
                self.state = SessionState::ConfirmCancel;
                SessionStep::ConfirmCancel
            }
            Command::Add { name, quantity } => match self.add(&name, quantity, stock) {
                Ok(step) => step,
                Err(rejection) => SessionStep::Rejected(rejection),
            },
        }
    }

    fn add(
        &mut self,
        name: &str,
        quantity: u32,
        stock: &impl StockView,
    ) -> Result<SessionStep, Rejection> {
        let key = stock
            .lookup_price(name)
            .map_err(|_| Rejection::UnknownItem(name.to_string()))?;
        let available = stock
            .available_quantity(&key)
            .map_err(|_| Rejection::UnknownItem(name.to_string()))?;

        let pending = self.cart.pending(&key);
        let insufficient = || Rejection::InsufficientStock {
            name: key.name.clone(),
            available,
            pending,
        };
        if i128::from(pending) + i128::from(quantity) > i128::from(available) {
            return Err(insufficient());
        }
        let pending = self
            .cart
            .add(key.clone(), quantity)
            .map_err(|e| match e {
                CartError::ZeroQuantity => Rejection::ZeroQuantity,
                CartError::QuantityOverflow => insufficient(),
                CartError::AmountOverflow => Rejection::AmountTooLarge(key.name.clone()),
            })?;

        Ok(SessionStep::Added {
            key,
            quantity,
            pending,
        })
    }

    fn resume(&mut self) -> SessionStep {
        self.state = SessionState::Collecting;
        SessionStep::Resumed
    }

    fn finish_checkout(&mut self) -> SessionStep {
        if self.cart.is_empty() {
            self.state = SessionState::Cancelled;
            return SessionStep::EmptyCart;
        }
        self.state = SessionState::Committed;
        SessionStep::Checkout(std::mem::take(&mut self.cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ledger::parse_ledger;
    use crate::inventory::InventorySnapshot;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn stock() -> InventorySnapshot {
        InventorySnapshot::from(parse_ledger(["potato, 1.35, 100", "onion, 0.50, 5"]))
    }

    fn session() -> OrderSession {
        OrderSession::new(CustomerInfo::new("John", "Doe"))
    }

    fn potato() -> ItemKey {
        ItemKey::new("potato", Decimal::from_str("1.35").unwrap())
    }

    #[test]
    fn test_add_item_to_cart() {
        let stock = stock();
        let mut session = session();

        let step = session.handle("Potato 23", &stock);
        assert_eq!(
            step,
            SessionStep::Added {
                key: potato(),
                quantity: 23,
                pending: 23
            }
        );
        assert_eq!(session.cart().pending(&potato()), 23);
        assert_eq!(session.state(), SessionState::Collecting);
    }

    #[test]
    fn test_insufficient_stock_leaves_cart_unchanged() {
        let stock = stock();
        let mut session = session();

        let step = session.handle("potato 500", &stock);
        assert!(matches!(
            step,
            SessionStep::Rejected(Rejection::InsufficientStock { available: 100, pending: 0, .. })
        ));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_pending_quantity_counts_against_stock() {
        let stock = stock();
        let mut session = session();

        session.handle("onion 3", &stock);
        let step = session.handle("onion 3", &stock);
        assert!(matches!(
            step,
            SessionStep::Rejected(Rejection::InsufficientStock { available: 5, pending: 3, .. })
        ));

        let step = session.handle("onion 2", &stock);
        assert!(matches!(step, SessionStep::Added { pending: 5, .. }));
    }

    #[test]
    fn test_unrepresentable_amount_is_rejected() {
        let stock = InventorySnapshot::from(parse_ledger(["gold, 50000000000000000000000000000, 10"]));
        let mut session = session();

        assert_eq!(
            session.handle("gold 2", &stock),
            SessionStep::Rejected(Rejection::AmountTooLarge("gold".to_string()))
        );
        assert!(session.cart().is_empty());

        assert!(matches!(session.handle("gold 1", &stock), SessionStep::Added { pending: 1, .. }));
        assert_eq!(
            session.handle("gold 1", &stock),
            SessionStep::Rejected(Rejection::AmountTooLarge("gold".to_string()))
        );
        assert_eq!(session.cart().total_quantity(), 1);
    }

    #[test]
    fn test_unknown_item_and_bad_tokens() {
        let stock = stock();
        let mut session = session();

        assert_eq!(
            session.handle("yam 1", &stock),
            SessionStep::Rejected(Rejection::UnknownItem("yam".to_string()))
        );
        assert_eq!(
            session.handle("potato", &stock),
            SessionStep::Rejected(Rejection::InvalidSelection)
        );
        assert_eq!(
            session.handle("potato 0", &stock),
            SessionStep::Rejected(Rejection::ZeroQuantity)
        );
        assert_eq!(session.handle("", &stock), SessionStep::Ignored);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_show_cart_does_not_change_state() {
        let stock = stock();
        let mut session = session();

        assert_eq!(session.handle("cart", &stock), SessionStep::ShowCart);
        assert_eq!(session.state(), SessionState::Collecting);
    }

    #[test]
    fn test_checkout_confirmed_hands_over_cart() {
        let stock = stock();
        let mut session = session();
        session.handle("potato 23", &stock);

        assert_eq!(session.handle("checkout", &stock), SessionStep::ConfirmCheckout);
        assert_eq!(session.handle("sure", &stock), SessionStep::Reprompt);
        assert_eq!(session.state(), SessionState::ConfirmCheckout);

        match session.handle("Y", &stock) {
            SessionStep::Checkout(cart) => assert_eq!(cart.pending(&potato()), 23),
            other => panic!("Expected Checkout, got {:?}", other),
        }
        assert_eq!(session.state(), SessionState::Committed);
        assert!(session.is_finished());
        assert_eq!(session.handle("potato 1", &stock), SessionStep::Closed);
    }

    #[test]
    fn test_checkout_declined_resumes_collecting() {
        let stock = stock();
        let mut session = session();
        session.handle("potato 2", &stock);

        session.handle("checkout", &stock);
        assert_eq!(session.handle("n", &stock), SessionStep::Resumed);
        assert_eq!(session.state(), SessionState::Collecting);
        assert_eq!(session.cart().pending(&potato()), 2);
    }

    #[test]
    fn test_checkout_with_empty_cart() {
        let stock = stock();
        let mut session = session();

        session.handle("checkout", &stock);
        assert_eq!(session.handle("yes", &stock), SessionStep::EmptyCart);
        assert_eq!(session.state(), SessionState::Cancelled);
    }

    #[test]
    fn test_cancel_discards_cart() {
        let stock = stock();
        let mut session = session();
        session.handle("potato 2", &stock);

        assert_eq!(session.handle("cancel", &stock), SessionStep::ConfirmCancel);
        assert_eq!(session.handle("no", &stock), SessionStep::Resumed);
        assert_eq!(session.cart().len(), 1);

        session.handle("cancel", &stock);
        assert_eq!(session.handle("Y", &stock), SessionStep::Cancelled);
        assert!(session.cart().is_empty());
        assert_eq!(session.state(), SessionState::Cancelled);
    }
}
