//! # Ledger Messages
//!
//! Requests sent from the [`LedgerClient`](super::LedgerClient) to the
//! [`LedgerActor`](super::LedgerActor). Each carries a oneshot sender for its reply.

use super::LedgerError;
use crate::inventory::{InventorySnapshot, RefreshReport};
use crate::model::{Cart, CustomerInfo, OrderRecord};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the ledger actor.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

#[derive(Debug)]
pub enum LedgerRequest {
    /// Re-read the ledger file.
    Refresh { respond_to: Response<RefreshReport> },
    /// Copy of the current in-memory inventory.
    Snapshot {
        respond_to: Response<InventorySnapshot>,
    },
    /// Deduct `cart` and record the order for `customer`.
    Checkout {
        customer: CustomerInfo,
        cart: Cart,
        respond_to: Response<OrderRecord>,
    },
}
