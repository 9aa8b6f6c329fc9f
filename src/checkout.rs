//! The order commit protocol.
//!
//! Committing a cart is three steps in a fixed order:
//!
//! 1. [`InventoryStore::commit`] deducts the cart and rewrites the ledger.
//! 2. [`OrderRecorder::allocate_identifier`] derives the next order id.
//! 3. [`OrderRecorder::persist`] writes the receipt.
//!
//! Stock is deducted before any receipt exists, so a receipt never refers to
//! stock that was not taken. A failure in step 2 or 3 leaves the deduction in
//! place; there is no rollback.

use crate::inventory::InventoryStore;
use crate::ledger::LedgerError;
use crate::model::{Cart, CustomerInfo, OrderRecord};
use crate::orders::{validate_customer, OrderRecorder};
use tracing::{info, instrument};

/// Commits `cart` for `customer` and records the order.
///
/// An empty cart is refused with [`LedgerError::EmptyCart`] before anything
/// is written. The customer name is checked up front too, so a name that
/// cannot form an order id never debits stock.
#[instrument(skip_all, fields(customer = %customer.full_name(), lines = cart.len()))]
pub fn commit_order(
    store: &mut InventoryStore,
    recorder: &OrderRecorder,
    customer: CustomerInfo,
    cart: Cart,
) -> Result<OrderRecord, LedgerError> {
    if cart.is_empty() {
        return Err(LedgerError::EmptyCart);
    }
    validate_customer(&customer)?;

    store.commit(&cart)?;
    let id = recorder.allocate_identifier(&customer)?;
    let record = recorder.persist(id, customer, cart)?;

    info!(order_id = %record.id, total = %record.total(), "Checkout complete");
    Ok(record)
}
