//! # Ledger Actor & Client
//!
//! One Tokio task owns the inventory store and the order recorder; everything
//! else talks to it through a [`LedgerClient`].
//!
//! ## Structure
//!
//! - [`actor`] - [`LedgerActor`], the message loop
//! - [`client`] - [`LedgerClient`], async request/response wrapper
//! - [`message`] - [`LedgerRequest`] and the [`Response`] channel alias
//! - [`error`] - [`LedgerError`]
//! - [`mock`] - channel-level helpers for testing code that uses a client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use food_inventory::inventory::InventoryStore;
//! use food_inventory::ledger::LedgerActor;
//! use food_inventory::orders::OrderRecorder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InventoryStore::open("inventory.txt")?;
//! let (actor, client) = LedgerActor::new(store, OrderRecorder::new("orders"), 32);
//! tokio::spawn(actor.run());
//!
//! let snapshot = client.snapshot().await?;
//! println!("{} items in stock", snapshot.len());
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;
