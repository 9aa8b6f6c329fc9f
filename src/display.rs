//! Text layout for operator screens and receipt files.
//!
//! Tables are three centered columns (15, 15 and 10 wide) separated by a
//! single space, under a banner of asterisks.

use crate::inventory::InventorySnapshot;
use crate::model::{money, Cart};
use std::fmt::Write;

const RULE: &str = "********************************************";
const UNDERLINE: &str = "---------";

/// Banner with a centered title between two rules.
pub fn banner(title: &str) -> String {
    format!("{RULE}\n{:^44}\n{RULE}\n", title)
}

/// Three centered cells.
pub fn row(item: &str, price: &str, last: &str) -> String {
    format!("{:^15} {:^15} {:^10}", item, price, last)
}

fn header(out: &mut String, last_column: &str) {
    let _ = writeln!(out, "{}", row("Items", "Price ($)", last_column));
    let _ = writeln!(out, "{}", row(UNDERLINE, UNDERLINE, UNDERLINE));
}

/// Application title shown at start-up.
pub fn title() -> String {
    banner("Food Inventory Management System")
}

pub fn inventory_table(snapshot: &InventorySnapshot) -> String {
    let mut out = String::from("\n");
    out.push_str(&banner("Current Inventory"));
    out.push('\n');
    header(&mut out, "Stock");
    for (key, stock) in snapshot.entries() {
        let _ = writeln!(out, "{}", row(&key.name, &key.price.to_string(), &stock.to_string()));
    }
    out
}

/// Item table for a cart: one line per item with its line total, then the grand total.
///
/// An empty cart renders a single `Empty` row and no total.
pub fn items_table(title: &str, cart: &Cart) -> String {
    let mut out = String::new();
    out.push_str(&banner(&format!("{} ({})", title, cart.total_quantity())));
    out.push('\n');
    header(&mut out, "Quantity");

    if cart.is_empty() {
        let _ = writeln!(out, "{}", row("Empty", "Empty", "Empty"));
        return out;
    }

    for line in cart.lines() {
        let _ = writeln!(
            out,
            "{}",
            row(line.name, &money(line.line_total), &line.quantity.to_string())
        );
    }
    let total = format!("Total ($): {}", money(cart.total_price()));
    let _ = writeln!(out, "\n{:^40}", total);
    out
}
