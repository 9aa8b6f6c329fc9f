use crate::config::StoreConfig;
use crate::inventory::InventoryStore;
use crate::ledger::{LedgerActor, LedgerClient, LedgerError};
use crate::orders::OrderRecorder;
use tracing::{error, info};

/// Channel capacity for the ledger actor.
const LEDGER_BUFFER: usize = 32;

/// The running inventory system: one ledger actor and a client to reach it.
///
/// # Example
///
/// ```rust,no_run
/// use food_inventory::config::StoreConfig;
/// use food_inventory::lifecycle::InventorySystem;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let system = InventorySystem::start(&StoreConfig::from_env())?;
///
/// let snapshot = system.ledger.snapshot().await?;
/// println!("{} items", snapshot.len());
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct InventorySystem {
    /// Client for interacting with the ledger actor
    pub ledger: LedgerClient,

    /// Task handle of the ledger actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Loads the ledger described by `config` and spawns the ledger actor.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Fails if the ledger file cannot be read. The orders directory is only
    /// created when the first order is recorded.
    pub fn start(config: &StoreConfig) -> Result<Self, LedgerError> {
        let store = InventoryStore::open(config.ledger_path())?;
        let recorder = OrderRecorder::new(config.orders_path());

        let (actor, ledger) = LedgerActor::new(store, recorder, LEDGER_BUFFER);
        let handle = tokio::spawn(actor.run());

        info!(root = %config.root().display(), "Inventory system started");
        Ok(Self { ledger, handle })
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the actor drains what is
    /// queued and exits. Any other clones of the client keep the actor alive
    /// until they are dropped too.
    pub async fn shutdown(self) -> Result<(), LedgerError> {
        info!("Shutting down system...");
        drop(self.ledger);

        if let Err(e) = self.handle.await {
            error!("Ledger task failed: {:?}", e);
            return Err(LedgerError::TaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
