//! Receipt text written for every order.
//!
//! ```text
//! Customer Name: John Doe
//! Customer Order ID: John_Doe_1
//! Customer File Name: John_Doe_1.txt
//!
//! ********************************************
//!              Items Ordered (23)
//! ********************************************
//! ...
//! ```

use crate::display;
use crate::model::OrderRecord;

/// Customer block: name and order id, optionally followed by the receipt file name.
pub fn customer_block(record: &OrderRecord, include_file_name: bool) -> String {
    let mut block = format!(
        "Customer Name: {}\nCustomer Order ID: {}",
        record.customer.full_name(),
        record.id
    );
    if include_file_name {
        block.push_str(&format!("\nCustomer File Name: {}", record.id.file_name()));
    }
    block
}

pub fn render_receipt(record: &OrderRecord) -> String {
    format!(
        "{}\n\n{}",
        customer_block(record, true),
        display::items_table("Items Ordered", &record.items)
    )
}
