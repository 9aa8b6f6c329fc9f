use super::ledger::ParsedLedger;
use super::InventoryError;
use crate::model::{ItemKey, Stock};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Read access to stock levels, as needed to validate a cart.
pub trait StockView {
    /// Resolves a bare item name (any case) to its pricing key.
    fn lookup_price(&self, name: &str) -> Result<ItemKey, InventoryError>;

    /// Current stock for an exact `(name, price)` key.
    fn available_quantity(&self, key: &ItemKey) -> Result<Stock, InventoryError>;
}

/// An in-memory view of the ledger: entries plus the name → price index.
///
/// Every name in `prices` has a matching entry in `entries`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    entries: IndexMap<ItemKey, Stock>,
    prices: HashMap<String, Decimal>,
}

impl InventorySnapshot {
    pub fn entries(&self) -> impl Iterator<Item = (&ItemKey, Stock)> {
        self.entries.iter().map(|(key, qty)| (key, *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entry_map(&self) -> &IndexMap<ItemKey, Stock> {
        &self.entries
    }

    /// Replaces the entries, keeping the price index as is.
    ///
    /// Only valid when `entries` has the same key set as the current one.
    pub(crate) fn with_entries(&self, entries: IndexMap<ItemKey, Stock>) -> Self {
        Self {
            entries,
            prices: self.prices.clone(),
        }
    }
}

impl From<ParsedLedger> for InventorySnapshot {
    fn from(parsed: ParsedLedger) -> Self {
        Self {
            entries: parsed.entries,
            prices: parsed.prices,
        }
    }
}

impl StockView for InventorySnapshot {
    fn lookup_price(&self, name: &str) -> Result<ItemKey, InventoryError> {
        let name = name.to_lowercase();
        match self.prices.get(&name) {
            Some(price) => Ok(ItemKey::new(name, *price)),
            None => Err(InventoryError::NotFound(name)),
        }
    }

    fn available_quantity(&self, key: &ItemKey) -> Result<Stock, InventoryError> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| InventoryError::KeyNotFound(key.clone()))
    }
}
