//! # Ledger Errors
//!
//! Errors returned through the [`LedgerClient`](super::LedgerClient). Channel
//! failures sit next to the store and recorder errors they wrap, so callers
//! match on one type.

use crate::inventory::InventoryError;
use crate::orders::OrderError;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Ledger actor closed")]
    ActorClosed,
    #[error("Ledger actor dropped response channel")]
    ActorDropped,
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Ledger task failed: {0}")]
    TaskFailed(String),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Order(#[from] OrderError),
}
