use crate::model::Cart;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Customer name as captured by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
}

impl CustomerInfo {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Identifier of an order, `first_last_sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId {
    value: String,
    sequence: u64,
}

impl OrderId {
    pub fn new(customer: &CustomerInfo, sequence: u64) -> Self {
        Self {
            value: format!(
                "{}_{}_{}",
                customer.first_name, customer.last_name, sequence
            ),
            sequence,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Name of the receipt file for this order.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.value)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A persisted customer order.
///
/// Created exactly once at checkout, after the inventory has been debited,
/// and never modified afterwards. The receipt file for the order is named
/// after its [`OrderId`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer: CustomerInfo,
    pub items: Cart,
}

impl OrderRecord {
    /// Creates a new OrderRecord instance.
    ///
    /// # Arguments
    /// * `id` - Allocated order id
    /// * `customer` - Who placed the order
    /// * `items` - Snapshot of the committed cart
    pub fn new(id: OrderId, customer: CustomerInfo, items: Cart) -> Self {
        Self {
            id,
            customer,
            items,
        }
    }

    pub fn total(&self) -> Decimal {
        self.items.total_price()
    }
}
