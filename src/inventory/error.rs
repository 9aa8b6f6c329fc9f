//! Error types for the inventory store.

use crate::model::ItemKey;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, querying or rewriting the ledger.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The ledger file could not be opened, read, written or synced.
    #[error("Ledger I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No item with this name is listed in the ledger.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// No ledger entry exists for this exact name and price.
    #[error("Ledger entry not found: {0}")]
    KeyNotFound(ItemKey),
}

impl InventoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InventoryError::Io {
            path: path.into(),
            source,
        }
    }
}
