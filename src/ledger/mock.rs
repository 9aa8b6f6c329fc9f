//! # Ledger Test Helpers
//!
//! A [`LedgerClient`] wired to a bare channel instead of a running actor. The
//! test plays the actor: it receives each request with an `expect_*` helper
//! and answers through the returned responder.
//!
//! ```rust
//! use food_inventory::inventory::InventorySnapshot;
//! use food_inventory::ledger::mock::{create_mock_client, expect_snapshot};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.snapshot().await });
//!
//!     let responder = expect_snapshot(&mut receiver).await.expect("Expected Snapshot request");
//!     responder.send(Ok(InventorySnapshot::default())).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_empty());
//! }
//! ```

use super::{LedgerClient, LedgerRequest, Response};
use crate::inventory::{InventorySnapshot, RefreshReport};
use crate::model::{Cart, CustomerInfo, OrderRecord};
use tokio::sync::mpsc;

/// Creates a client and the receiving end of its channel.
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Refresh request
pub async fn expect_refresh(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<Response<RefreshReport>> {
    match receiver.recv().await {
        Some(LedgerRequest::Refresh { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<Response<InventorySnapshot>> {
    match receiver.recv().await {
        Some(LedgerRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Checkout request
pub async fn expect_checkout(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(CustomerInfo, Cart, Response<OrderRecord>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Checkout {
            customer,
            cart,
            respond_to,
        }) => Some((customer, cart, respond_to)),
        _ => None,
    }
}
