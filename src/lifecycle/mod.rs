//! # System Lifecycle
//!
//! Start-up and shutdown of the ledger actor, and logging setup.
//!
//! - [`InventorySystem`] - loads the ledger, spawns the actor, hands out the client
//! - [`setup_tracing`] - installs the `tracing` subscriber

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use self::tracing::*;
