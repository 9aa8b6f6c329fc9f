//! # Inventory Store
//!
//! Owns the in-memory view of the ledger file and is the only code that writes it.
//!
//! ## Structure
//!
//! - [`ledger`] - line codec (`name, price, quantity`)
//! - [`snapshot`] - [`InventorySnapshot`] and the [`StockView`] read trait
//! - [`error`] - [`InventoryError`]
//!
//! ## Consistency
//!
//! [`InventoryStore::refresh`] parses the whole file into a fresh snapshot and
//! swaps it in only once parsing has finished. [`InventoryStore::commit`]
//! applies a cart to a copy of the entries, rewrites the file, syncs it to
//! disk, and only then replaces the in-memory view.
//!
//! `commit` does not check that stock is sufficient. Carts are validated by
//! the [`OrderSession`](crate::session::OrderSession) against a snapshot, and
//! the ledger actor processes one request at a time, so no other write can
//! land between validation and commit.

pub mod error;
pub mod ledger;
pub mod snapshot;

pub use error::*;
pub use snapshot::*;

use crate::model::{Cart, ItemKey, Stock};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a ledger refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    /// Entries now held in memory.
    pub entries: usize,
    /// Malformed lines that were dropped.
    pub skipped: usize,
}

/// The ledger file and its current in-memory view.
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    snapshot: InventorySnapshot,
}

impl InventoryStore {
    /// Opens the ledger at `path` and loads it.
    ///
    /// # Errors
    /// Fails with [`InventoryError::Io`] if the file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, InventoryError> {
        let mut store = Self {
            path: path.into(),
            snapshot: InventorySnapshot::default(),
        };
        store.refresh()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &InventorySnapshot {
        &self.snapshot
    }

    /// Re-reads the ledger file, replacing the in-memory view.
    ///
    /// Malformed lines are dropped; their count is returned and logged.
    pub fn refresh(&mut self) -> Result<RefreshReport, InventoryError> {
        let file = File::open(&self.path).map_err(|e| InventoryError::io(&self.path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| InventoryError::io(&self.path, e))?;

        let parsed = ledger::parse_ledger(lines.iter().map(String::as_str));
        let report = RefreshReport {
            entries: parsed.entries.len(),
            skipped: parsed.skipped,
        };
        self.snapshot = InventorySnapshot::from(parsed);

        if report.skipped > 0 {
            warn!(path = %self.path.display(), skipped = report.skipped, "Dropped malformed ledger lines");
        }
        info!(entries = report.entries, "Ledger refreshed");
        Ok(report)
    }

    /// Deducts every cart line from stock and rewrites the ledger.
    ///
    /// Quantities are subtracted as given; see the module docs for why stock
    /// is not re-checked here. Fails without touching anything if a cart key
    /// has no ledger entry.
    pub fn commit(&mut self, cart: &Cart) -> Result<(), InventoryError> {
        let mut entries = self.snapshot.entry_map().clone();
        for (key, quantity) in cart.iter() {
            let stock = entries
                .get_mut(key)
                .ok_or_else(|| InventoryError::KeyNotFound(key.clone()))?;
            *stock -= Stock::from(quantity);
            debug!(item = %key, quantity, remaining = *stock, "Deducted");
        }

        write_synced(&self.path, &ledger::render_ledger(&entries))
            .map_err(|e| InventoryError::io(&self.path, e))?;
        self.snapshot = self.snapshot.with_entries(entries);

        info!(lines = cart.len(), units = cart.total_quantity(), "Ledger committed");
        Ok(())
    }
}

impl StockView for InventoryStore {
    fn lookup_price(&self, name: &str) -> Result<ItemKey, InventoryError> {
        self.snapshot.lookup_price(name)
    }

    fn available_quantity(&self, key: &ItemKey) -> Result<Stock, InventoryError> {
        self.snapshot.available_quantity(key)
    }
}

/// Truncates `path`, writes `contents`, and syncs the file before returning.
pub(crate) fn write_synced(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
