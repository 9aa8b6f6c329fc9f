//! Input rejections reported to the operator while building a cart.

use thiserror::Error;

/// Why a line typed during an order session was not accepted.
///
/// The `Display` text is what the operator sees. A rejection never changes
/// the cart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// Not a keyword and not exactly `<item> <quantity>`.
    #[error("Invalid selection. Please try again.")]
    InvalidSelection,

    /// The quantity is not a whole number.
    #[error("Invalid quantity. Please enter a digit(s).")]
    InvalidQuantity,

    #[error("Invalid quantity. Please enter a non-zero quantity.")]
    ZeroQuantity,

    #[error("Could not find \"{0}\" in inventory. Please try again.")]
    UnknownItem(String),

    /// Requested plus already-pending quantity exceeds stock.
    #[error("Not enough stock for {name} ({available} available, {pending} already in cart). Please try again.")]
    InsufficientStock {
        name: String,
        available: i64,
        pending: u32,
    },

    /// The line total for the item would not fit in a money amount.
    #[error("Order amount for {0} is too large. Please try again.")]
    AmountTooLarge(String),
}
