use crate::model::ItemKey;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use thiserror::Error;

/// Why a line could not be added to a [`Cart`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("pending quantity does not fit in a u32")]
    QuantityOverflow,

    /// The line or cart total is beyond what a `Decimal` can hold.
    #[error("order amount is too large to represent")]
    AmountOverflow,
}

/// Items requested during one order session, keyed by `(name, price)`.
///
/// Lines keep the order in which they were first added. Quantities are
/// always positive and every line total, as well as the cart total, is
/// representable; a cart only grows through [`Cart::add`], which enforces both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: IndexMap<ItemKey, CartEntry>,
    total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CartEntry {
    quantity: u32,
    line_total: Decimal,
}

/// One rendered cart line: name, price for the whole line, and quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub name: &'a str,
    pub line_total: Decimal,
    pub quantity: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `key`, returning the new pending total for that key.
    ///
    /// On error the cart is left untouched.
    pub fn add(&mut self, key: ItemKey, quantity: u32) -> Result<u32, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        let previous = self.lines.get(&key).copied();
        let pending = previous
            .map_or(0, |entry| entry.quantity)
            .checked_add(quantity)
            .ok_or(CartError::QuantityOverflow)?;
        let line_total = key.line_total(pending).ok_or(CartError::AmountOverflow)?;
        let total = self
            .total
            .checked_sub(previous.map_or(Decimal::ZERO, |entry| entry.line_total))
            .and_then(|rest| rest.checked_add(line_total))
            .ok_or(CartError::AmountOverflow)?;

        self.lines.insert(
            key,
            CartEntry {
                quantity: pending,
                line_total,
            },
        );
        self.total = total;
        Ok(pending)
    }

    /// Quantity already requested for `key` (zero if absent).
    pub fn pending(&self, key: &ItemKey) -> u32 {
        self.lines.get(key).map_or(0, |entry| entry.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, u32)> {
        self.lines.iter().map(|(key, entry)| (key, entry.quantity))
    }

    pub fn lines(&self) -> impl Iterator<Item = CartLine<'_>> {
        self.lines.iter().map(|(key, entry)| CartLine {
            name: &key.name,
            line_total: entry.line_total,
            quantity: entry.quantity,
        })
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.values().map(|entry| u64::from(entry.quantity)).sum()
    }

    pub fn total_price(&self) -> Decimal {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn key(name: &str, price: &str) -> ItemKey {
        ItemKey::new(name, Decimal::from_str(price).unwrap())
    }

    #[test]
    fn test_add_accumulates_per_key() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(key("potato", "1.35"), 3), Ok(3));
        assert_eq!(cart.add(key("potato", "1.35"), 4), Ok(7));
        assert_eq!(cart.add(key("potato", "1.50"), 1), Ok(1));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.pending(&key("potato", "1.35")), 7);
        assert_eq!(cart.total_quantity(), 8);
    }

    #[test]
    fn test_zero_quantity_is_refused() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(key("potato", "1.35"), 0), Err(CartError::ZeroQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_overflow_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(key("salt", "0.10"), u32::MAX).unwrap();
        assert_eq!(cart.add(key("salt", "0.10"), 1), Err(CartError::QuantityOverflow));
        assert_eq!(cart.pending(&key("salt", "0.10")), u32::MAX);
    }

    #[test]
    fn test_unrepresentable_amount_is_refused() {
        let gold = key("gold", "50000000000000000000000000000");
        let mut cart = Cart::new();

        assert_eq!(cart.add(gold.clone(), 1), Ok(1));
        assert_eq!(cart.add(gold.clone(), 1), Err(CartError::AmountOverflow));
        assert_eq!(cart.pending(&gold), 1);
        assert_eq!(cart.total_price(), gold.price);

        // Each line fits on its own but the sum does not
        let other = key("silver", "40000000000000000000000000000");
        assert_eq!(cart.add(other.clone(), 1), Err(CartError::AmountOverflow));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(key("potato", "1.35"), 20).unwrap();
        cart.add(key("onion", "0.50"), 2).unwrap();
        cart.add(key("potato", "1.35"), 3).unwrap();

        let lines: Vec<_> = cart.lines().collect();
        assert_eq!(lines[0].name, "potato");
        assert_eq!(lines[0].line_total, Decimal::from_str("31.05").unwrap());
        assert_eq!(lines[1].quantity, 2);
        assert_eq!(cart.total_price(), Decimal::from_str("32.05").unwrap());
    }
}
