//! Tokenizing operator input for an order session.

use super::Rejection;

/// A line typed while collecting items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input, re-prompt.
    Empty,
    ShowCart,
    Checkout,
    Cancel,
    /// `<item_name> <quantity>`, name lowercased.
    Add { name: String, quantity: u32 },
}

/// Answer to a yes/no confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

/// Parses one line typed in the collecting state.
///
/// Keywords are case-insensitive. Anything else must be exactly two tokens,
/// the second made only of ASCII digits and greater than zero.
pub fn parse_command(input: &str) -> Result<Command, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Command::Empty);
    }
    match input.to_lowercase().as_str() {
        "cart" => return Ok(Command::ShowCart),
        "checkout" => return Ok(Command::Checkout),
        "cancel" => return Ok(Command::Cancel),
        _ => {}
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [name, quantity] = tokens.as_slice() else {
        return Err(Rejection::InvalidSelection);
    };
    if !quantity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::InvalidQuantity);
    }
    // All digits, so the only possible parse failure is overflow
    let quantity: u32 = quantity.parse().map_err(|_| Rejection::InvalidQuantity)?;
    if quantity == 0 {
        return Err(Rejection::ZeroQuantity);
    }
    Ok(Command::Add {
        name: name.to_lowercase(),
        quantity,
    })
}

/// Parses `y`/`yes`/`n`/`no` in any case; anything else is `None`.
pub fn parse_confirmation(input: &str) -> Option<Confirmation> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Confirmation::Yes),
        "n" | "no" => Some(Confirmation::No),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command(""), Ok(Command::Empty));
        assert_eq!(parse_command("   "), Ok(Command::Empty));
        assert_eq!(parse_command("Cart"), Ok(Command::ShowCart));
        assert_eq!(parse_command("CHECKOUT"), Ok(Command::Checkout));
        assert_eq!(parse_command("cancel"), Ok(Command::Cancel));
    }

    #[test]
    fn test_add_item() {
        assert_eq!(
            parse_command("Potato 23"),
            Ok(Command::Add {
                name: "potato".to_string(),
                quantity: 23
            })
        );
    }

    #[test]
    fn test_rejections() {
        assert_eq!(parse_command("potato"), Err(Rejection::InvalidSelection));
        assert_eq!(parse_command("sweet potato 2"), Err(Rejection::InvalidSelection));
        assert_eq!(parse_command("potato two"), Err(Rejection::InvalidQuantity));
        assert_eq!(parse_command("potato -3"), Err(Rejection::InvalidQuantity));
        assert_eq!(parse_command("potato 1.5"), Err(Rejection::InvalidQuantity));
        assert_eq!(parse_command("potato 99999999999"), Err(Rejection::InvalidQuantity));
        assert_eq!(parse_command("potato 0"), Err(Rejection::ZeroQuantity));
        assert_eq!(parse_command("potato 000"), Err(Rejection::ZeroQuantity));
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(parse_confirmation("Y"), Some(Confirmation::Yes));
        assert_eq!(parse_confirmation("yes"), Some(Confirmation::Yes));
        assert_eq!(parse_confirmation("n"), Some(Confirmation::No));
        assert_eq!(parse_confirmation("NO"), Some(Confirmation::No));
        assert_eq!(parse_confirmation("maybe"), None);
        assert_eq!(parse_confirmation(""), None);
    }
}
