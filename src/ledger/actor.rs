//! # Ledger Actor
//!
//! The single writer for the ledger file and the orders directory.
//!
//! The actor owns the [`InventoryStore`] and the [`OrderRecorder`] and
//! processes one [`LedgerRequest`] at a time. A checkout therefore runs
//! commit, id allocation and receipt write with nothing in between, and no
//! second writer can touch the ledger while it does.
//!
//! File access inside the loop is blocking and runs on the actor's own task.

use super::{LedgerClient, LedgerError, LedgerRequest};
use crate::checkout::commit_order;
use crate::inventory::InventoryStore;
use crate::orders::OrderRecorder;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    store: InventoryStore,
    recorder: OrderRecorder,
}

impl LedgerActor {
    /// Creates a new `LedgerActor` and its associated `LedgerClient`.
    ///
    /// # Arguments
    ///
    /// * `store` - The loaded inventory store
    /// * `recorder` - Where receipts are written
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(
        store: InventoryStore,
        recorder: OrderRecorder,
        buffer_size: usize,
    ) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            recorder,
        };
        (actor, LedgerClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        info!(
            ledger = %self.store.path().display(),
            orders = %self.recorder.dir().display(),
            entries = self.store.snapshot().len(),
            "Ledger actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Refresh { respond_to } => {
                    debug!("Refresh");
                    let result: Result<_, LedgerError> = self.store.refresh().map_err(Into::into);
                    if let Err(e) = &result {
                        warn!(error = %e, "Refresh failed");
                    }
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Snapshot { respond_to } => {
                    debug!(entries = self.store.snapshot().len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.store.snapshot().clone()));
                }
                LedgerRequest::Checkout {
                    customer,
                    cart,
                    respond_to,
                } => {
                    debug!(?customer, ?cart, "Checkout");
                    let result = commit_order(&mut self.store, &self.recorder, customer, cart);
                    match &result {
                        Ok(record) => info!(order_id = %record.id, "Checkout ok"),
                        Err(e) => warn!(error = %e, "Checkout failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entries = self.store.snapshot().len(), "Ledger actor shutdown");
    }
}
