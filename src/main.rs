//! # Food Inventory Console
//!
//! Interactive front end for the operator.
//!
//! 1. Loads the ledger via [`InventorySystem`] (storage root from `FOOD_INVENTORY_ROOT`).
//! 2. Shows the main menu: view inventory, create an order, exit.
//! 3. Feeds each typed line of an order to an [`OrderSession`] and performs
//!    the checkout through the ledger client.

use food_inventory::config::StoreConfig;
use food_inventory::display;
use food_inventory::ledger::LedgerClient;
use food_inventory::lifecycle::{setup_tracing, InventorySystem};
use food_inventory::model::CustomerInfo;
use food_inventory::orders::{receipt, validate_customer};
use food_inventory::session::{OrderSession, SessionState, SessionStep};
use std::error::Error;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

const MENU_OPTIONS: [&str; 4] = [
    "Main Menu",
    "Current Inventory",
    "Create New Order",
    "Exit Application",
];

/// Line-oriented operator input. `None` means stdin was closed.
struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        self.lines.next_line().await
    }
}

fn print_menu() {
    println!();
    print!("{}", display::banner("Menu"));
    println!();
    for (number, option) in MENU_OPTIONS.iter().enumerate() {
        println!("[{}] {}", number + 1, option);
    }
    println!();
}

fn print_session_help() {
    println!("******************************************************");
    println!("Please enter each item to order in the format below.");
    println!("To look at items currently in cart, enter: \"cart\"");
    println!("To finish order, enter: \"checkout\"");
    println!("To cancel order, enter: \"cancel\"");
    println!("******************************************************");
    println!();
}

fn prompt_for(state: SessionState) -> &'static str {
    match state {
        SessionState::ConfirmCheckout => "Complete checkout (Y or N): ",
        SessionState::ConfirmCancel => "Cancel this order (Y or N): ",
        _ => "Enter Item and Quantity (Ex: potato 23): ",
    }
}

/// Asks for the customer's name until it is confirmed and usable in an order id.
async fn ask_customer(console: &mut Console) -> std::io::Result<Option<CustomerInfo>> {
    let mut customer = match read_customer(console).await? {
        Some(customer) => customer,
        None => return Ok(None),
    };

    loop {
        println!("Please confirm info below:");
        println!("Customer Name: {}", customer.full_name());
        let Some(answer) = console.ask("Is this correct (Y or N): ").await? else {
            return Ok(None);
        };

        match answer.trim().to_uppercase().as_str() {
            "Y" => match validate_customer(&customer) {
                Ok(()) => break,
                Err(e) => println!("{e}. Please enter the name again."),
            },
            "N" => {}
            _ => continue,
        }

        customer = match read_customer(console).await? {
            Some(customer) => customer,
            None => return Ok(None),
        };
        println!("Customer Name changed to: {}", customer.full_name());
    }

    println!();
    println!("Customer information saved!");
    Ok(Some(customer))
}

async fn read_customer(console: &mut Console) -> std::io::Result<Option<CustomerInfo>> {
    let Some(first) = console.ask("Customer First Name: ").await? else {
        return Ok(None);
    };
    let Some(last) = console.ask("Customer Last Name: ").await? else {
        return Ok(None);
    };
    Ok(Some(CustomerInfo::new(first.trim(), last.trim())))
}

/// Runs one order session. Returns `false` if stdin closed mid-order.
async fn create_order(
    console: &mut Console,
    ledger: &LedgerClient,
    config: &StoreConfig,
) -> Result<bool, Box<dyn Error>> {
    println!();
    println!("Enter customer information below.");
    println!();
    let Some(customer) = ask_customer(console).await? else {
        return Ok(false);
    };
    println!();

    // Validation runs against this snapshot; the ledger actor is the only writer.
    let stock = ledger.snapshot().await?;
    let mut session = OrderSession::new(customer);
    print_session_help();

    loop {
        let Some(line) = console.ask(prompt_for(session.state())).await? else {
            return Ok(false);
        };

        match session.handle(&line, &stock) {
            SessionStep::Rejected(rejection) => println!("{rejection}"),
            SessionStep::Reprompt => println!("Invalid selection. Please try again."),
            SessionStep::ShowCart => {
                println!();
                print!("{}", display::items_table("Cart", session.cart()));
                println!();
            }
            SessionStep::Checkout(cart) => {
                match ledger.checkout(session.customer().clone(), cart).await {
                    Ok(record) => {
                        let location = config.orders_path().join(record.id.file_name());
                        println!();
                        println!("Order Location: {}", location.display());
                        println!("{}", receipt::customer_block(&record, true));
                        println!();
                        print!("{}", display::items_table("Items Ordered", &record.items));
                        println!("Checkout complete! Returning to main menu.");
                        println!();
                    }
                    Err(e) => {
                        error!(error = %e, "Checkout failed");
                        println!("Checkout failed: {e}. Returning to main menu.");
                    }
                }
                return Ok(true);
            }
            SessionStep::EmptyCart => {
                println!("Empty Cart. No order created. Returning to main menu.");
                return Ok(true);
            }
            SessionStep::Cancelled => {
                println!("Order cancelled. Returning to main menu.");
                return Ok(true);
            }
            SessionStep::Closed => return Ok(true),
            SessionStep::Added { .. }
            | SessionStep::Ignored
            | SessionStep::ConfirmCheckout
            | SessionStep::ConfirmCancel
            | SessionStep::Resumed => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = StoreConfig::from_env();
    let system = InventorySystem::start(&config)?;
    info!(ledger = %config.ledger_path().display(), "Starting console");

    print!("{}", display::title());
    println!();
    print_menu();

    let mut console = Console::new();
    loop {
        let Some(selection) = console.ask("Select Option #: ").await? else {
            break;
        };
        let selection = selection.trim();
        if selection.is_empty() {
            continue;
        }

        match selection.parse::<usize>() {
            Ok(1) => print_menu(),
            Ok(2) => {
                let snapshot = system.ledger.snapshot().await?;
                println!("{}", display::inventory_table(&snapshot));
            }
            Ok(3) => {
                let still_open = create_order(&mut console, &system.ledger, &config).await?;
                // Pick up any edits made to the ledger file while the order was open
                system.ledger.refresh().await?;
                if !still_open {
                    break;
                }
            }
            Ok(4) => {
                println!();
                println!("Successfully exited application.");
                break;
            }
            _ => println!("Invalid option (1 for Main Menu). Please try again."),
        }
    }

    system.shutdown().await?;
    Ok(())
}
