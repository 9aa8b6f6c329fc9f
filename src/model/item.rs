use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stock level for one ledger entry.
///
/// Signed so that a commit which skipped validation shows up as a negative
/// count instead of wrapping around.
pub type Stock = i64;

/// Compound identity of a ledger item: the lowercased name together with its unit price.
///
/// The same display name may appear at several prices; each `(name, price)`
/// pair is its own logical item. Equality and hashing cover both fields, and
/// `Decimal` compares numerically, so `1.35` and `1.350` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
    pub price: Decimal,
}

impl ItemKey {
    /// Creates a key, normalizing the name to lowercase.
    pub fn new(name: impl AsRef<str>, price: Decimal) -> Self {
        Self {
            name: name.as_ref().to_lowercase(),
            price,
        }
    }

    /// Price of `quantity` units of this item, or `None` if it overflows a `Decimal`.
    pub fn line_total(&self, quantity: u32) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(quantity))
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.price)
    }
}

/// Formats an amount with exactly two decimals, rounding half away from zero.
pub fn money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_key_lowercases_name() {
        let key = ItemKey::new("Potato", dec("1.35"));
        assert_eq!(key.name, "potato");
    }

    #[test]
    fn test_price_is_part_of_identity() {
        let cheap = ItemKey::new("rice", dec("2.00"));
        let dear = ItemKey::new("rice", dec("2.50"));
        assert_ne!(cheap, dear);

        let mut keys = HashSet::new();
        keys.insert(cheap.clone());
        keys.insert(dear);
        keys.insert(ItemKey::new("RICE", dec("2.0")));
        assert_eq!(keys.len(), 2, "2.0 and 2.00 are the same price");
    }

    #[test]
    fn test_line_total_and_money() {
        let key = ItemKey::new("potato", dec("1.35"));
        assert_eq!(key.line_total(23).map(money).as_deref(), Some("31.05"));
        assert_eq!(money(dec("2")), "2.00");
        assert_eq!(money(dec("0.125")), "0.13");
    }

    #[test]
    fn test_line_total_overflow_is_none() {
        let key = ItemKey::new("gold", dec("50000000000000000000000000000"));
        assert_eq!(key.line_total(1), Some(key.price));
        assert_eq!(key.line_total(2), None);
    }
}
