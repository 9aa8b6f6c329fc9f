//! # Order Recorder
//!
//! Allocates order ids and writes one receipt file per order into the orders
//! directory. Receipts are never modified once written.
//!
//! ## Structure
//!
//! - [`sequence`] - [`next_sequence`] and [`parse_sequence`], the pure allocation rule
//! - [`receipt`] - receipt text layout
//! - [`error`] - [`OrderError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use food_inventory::model::{Cart, CustomerInfo};
//! use food_inventory::orders::OrderRecorder;
//!
//! # fn main() -> Result<(), food_inventory::orders::OrderError> {
//! let recorder = OrderRecorder::new("orders");
//! let customer = CustomerInfo::new("John", "Doe");
//! let id = recorder.allocate_identifier(&customer)?;
//! let record = recorder.persist(id, customer, Cart::new())?;
//! println!("wrote {}", record.id.file_name());
//! # Ok(())
//! # }
//! ```
//!
//! Allocate-then-persist is only collision-free while a single writer owns the
//! directory; the ledger actor provides that.

pub mod error;
pub mod receipt;
pub mod sequence;

pub use error::*;
pub use sequence::*;

use crate::model::{Cart, CustomerInfo, OrderId, OrderRecord};
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OrderRecorder {
    dir: PathBuf,
}

impl OrderRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the receipt for `id`.
    pub fn receipt_path(&self, id: &OrderId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    fn ensure_dir(&self) -> Result<(), OrderError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| OrderError::io(&self.dir, e))
    }

    /// Sequence numbers embedded in the receipt names currently on disk.
    ///
    /// Creates the orders directory if it does not exist yet.
    pub fn existing_sequences(&self) -> Result<BTreeSet<u64>, OrderError> {
        self.ensure_dir()?;
        let mut found = BTreeSet::new();
        for entry in std::fs::read_dir(&self.dir).map_err(|e| OrderError::io(&self.dir, e))? {
            let entry = entry.map_err(|e| OrderError::io(&self.dir, e))?;
            let name = entry.file_name();
            match name.to_str().and_then(parse_sequence) {
                Some(sequence) => {
                    found.insert(sequence);
                }
                None => debug!(file = ?name, "Ignoring non-order file"),
            }
        }
        Ok(found)
    }

    /// Allocates the id for a new order by `customer`.
    pub fn allocate_identifier(&self, customer: &CustomerInfo) -> Result<OrderId, OrderError> {
        validate_customer(customer)?;
        let existing = self.existing_sequences()?;
        let sequence = next_sequence(&existing).ok_or(OrderError::SequenceExhausted)?;
        let id = OrderId::new(customer, sequence);
        debug!(order_id = %id, existing = existing.len(), "Allocated");
        Ok(id)
    }

    /// Writes the receipt for a new order and syncs it to disk.
    ///
    /// Refuses to overwrite an existing receipt.
    pub fn persist(
        &self,
        id: OrderId,
        customer: CustomerInfo,
        items: Cart,
    ) -> Result<OrderRecord, OrderError> {
        self.ensure_dir()?;
        let record = OrderRecord::new(id, customer, items);
        let path = self.receipt_path(&record.id);
        let contents = receipt::render_receipt(&record);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => OrderError::AlreadyExists(record.id.to_string()),
                _ => OrderError::io(&path, e),
            })?;

        let mut writer = BufWriter::new(file);
        let written = writer
            .write_all(contents.as_bytes())
            .and_then(|_| writer.flush())
            .and_then(|_| writer.get_ref().sync_all());
        written.map_err(|e| OrderError::io(&path, e))?;

        info!(order_id = %record.id, path = %path.display(), "Order recorded");
        Ok(record)
    }
}

/// Checks that a customer name can be embedded in an id and a file name.
///
/// Names must be non-blank and may not contain `_` (the id separator), path
/// separators or control characters, nor start with `.`.
pub fn validate_customer(customer: &CustomerInfo) -> Result<(), OrderError> {
    for name in [&customer.first_name, &customer.last_name] {
        if name.trim().is_empty() {
            return Err(OrderError::InvalidCustomer("name is blank".to_string()));
        }
        if name.starts_with('.') {
            return Err(OrderError::InvalidCustomer(format!("{name:?} starts with '.'")));
        }
        if name
            .chars()
            .any(|c| c == '_' || c == '/' || c == '\\' || c.is_control())
        {
            return Err(OrderError::InvalidCustomer(format!(
                "{name:?} contains '_', a path separator or a control character"
            )));
        }
    }
    Ok(())
}
