//! Error types for the order recorder.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while allocating an order id or writing a receipt.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The orders directory could not be created or listed, or a receipt could not be written.
    #[error("Order I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The customer name cannot be embedded in an order id.
    #[error("Invalid customer name: {0}")]
    InvalidCustomer(String),

    /// No further sequence number can be allocated.
    #[error("Order sequence exhausted")]
    SequenceExhausted,

    /// A receipt with this id already exists and will not be overwritten.
    #[error("Order already exists: {0}")]
    AlreadyExists(String),
}

impl OrderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OrderError::Io {
            path: path.into(),
            source,
        }
    }
}
