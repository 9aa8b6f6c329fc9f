//! Line codec for the ledger file.
//!
//! Each entry is one line of three fields separated by `", "`:
//!
//! ```text
//! potato, 1.35, 100
//! ```
//!
//! Parsing is lenient: a line that does not split into exactly three fields,
//! or whose price or quantity is not a number, is dropped and counted rather
//! than failing the whole read.

use crate::model::{ItemKey, Stock};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

pub const FIELD_SEPARATOR: &str = ", ";

/// Result of parsing a whole ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLedger {
    pub entries: IndexMap<ItemKey, Stock>,
    pub prices: HashMap<String, Decimal>,
    /// Non-blank lines that were dropped.
    pub skipped: usize,
}

/// Parses one ledger line, returning `None` if it is malformed.
pub fn parse_line(line: &str) -> Option<(ItemKey, Stock)> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, price, quantity] = fields.as_slice() else {
        return None;
    };
    let price = Decimal::from_str(price.trim()).ok()?;
    let quantity = quantity.trim().parse::<Stock>().ok()?;
    Some((ItemKey::new(name, price), quantity))
}

/// Formats one ledger line, without the trailing newline.
pub fn format_line(key: &ItemKey, quantity: Stock) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        key.name,
        key.price,
        quantity,
        sep = FIELD_SEPARATOR
    )
}

/// Parses ledger lines into entries and a name → price index.
///
/// A repeated `(name, price)` keeps its first position and takes the later
/// quantity. A repeated name at a different price is a separate entry; the
/// price index points at the last one seen.
pub fn parse_ledger<'a>(lines: impl IntoIterator<Item = &'a str>) -> ParsedLedger {
    let mut parsed = ParsedLedger::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((key, quantity)) => {
                parsed.prices.insert(key.name.clone(), key.price);
                parsed.entries.insert(key, quantity);
            }
            None => parsed.skipped += 1,
        }
    }
    parsed
}

/// Serializes entries back to ledger text, one line per entry in map order.
pub fn render_ledger(entries: &IndexMap<ItemKey, Stock>) -> String {
    let mut out = String::new();
    for (key, quantity) in entries {
        out.push_str(&format_line(key, *quantity));
        out.push('\n');
    }
    out
}
