//! Storage locations.
//!
//! The ledger and the orders directory live under one storage root. Nothing
//! else reads the working directory; callers pass a [`StoreConfig`] in.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the storage root.
pub const ROOT_ENV_VAR: &str = "FOOD_INVENTORY_ROOT";

pub const DEFAULT_LEDGER_FILE: &str = "inventory.txt";
pub const DEFAULT_ORDERS_DIR: &str = "orders";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub ledger_file: String,
    pub orders_dir: String,
}

impl StoreConfig {
    /// Config rooted at `root` with the default file names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ledger_file: DEFAULT_LEDGER_FILE.to_string(),
            orders_dir: DEFAULT_ORDERS_DIR.to_string(),
        }
    }

    /// Root from `FOOD_INVENTORY_ROOT` if set and non-empty, else the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(ROOT_ENV_VAR) {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::new("."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(&self.ledger_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.root.join(&self.orders_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_under_root() {
        let config = StoreConfig::new("/srv/shop");
        assert_eq!(config.ledger_path(), PathBuf::from("/srv/shop/inventory.txt"));
        assert_eq!(config.orders_path(), PathBuf::from("/srv/shop/orders"));
    }

    #[test]
    fn test_default_root_is_working_directory() {
        let config = StoreConfig::default();
        assert_eq!(config.ledger_path(), PathBuf::from("./inventory.txt"));
        assert_eq!(config.orders_path(), PathBuf::from("./orders"));
    }
}
