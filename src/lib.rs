//! # Food Inventory
//!
//! > **A flat-file inventory ledger and order taker for a small food retailer.**
//!
//! The ledger (`inventory.txt`) lists every item with its unit price and the
//! quantity on hand. An operator builds a customer order line by line; on
//! checkout the stock is deducted, the ledger is rewritten, and a receipt is
//! written to `orders/<first>_<last>_<sequence>.txt`.
//!
//! ## 🛡️ Invariants
//!
//! - **Stock never goes negative** through an order session: every item
//!   request is checked against stock minus what is already in the cart.
//! - **Order ids never collide**: the next sequence number is one more than
//!   the highest on disk, and receipts are created exclusively.
//! - **The ledger stays parseable**: it is rewritten whole and synced to disk
//!   on every commit, and the in-memory view is replaced only after the write.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Value types: [`ItemKey`](model::ItemKey), [`Cart`](model::Cart),
//! [`OrderRecord`](model::OrderRecord).
//!
//! ### 2. The Stores ([`inventory`], [`orders`])
//! - [`InventoryStore`](inventory::InventoryStore): refresh, lookup, commit.
//! - [`OrderRecorder`](orders::OrderRecorder): id allocation and receipts.
//!
//! ### 3. The Protocol ([`session`], [`checkout`])
//! - [`OrderSession`](session::OrderSession): the cart-building state machine.
//! - [`commit_order`](checkout::commit_order): deduct, then allocate, then persist.
//!
//! ### 4. The Single Writer ([`ledger`], [`lifecycle`])
//! One actor task owns both stores; everything goes through a
//! [`LedgerClient`](ledger::LedgerClient). [`InventorySystem`](lifecycle::InventorySystem)
//! starts and stops it.
//!
//! ### 5. Presentation ([`display`])
//! Banners and centered tables for the console and the receipts.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run against ./inventory.txt
//! cargo run
//!
//! # Use another storage root, with logs
//! FOOD_INVENTORY_ROOT=/srv/shop RUST_LOG=info cargo run 2>shop.log
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod checkout;
pub mod config;
pub mod display;
pub mod inventory;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod session;
