//! # Observability & Tracing
//!
//! Structured logging for the whole application through the `tracing` crate.
//!
//! ## Configuration
//!
//! Log level comes from `RUST_LOG`. Output goes to **stderr** in the compact
//! format without module targets, so the operator screens on stdout stay
//! readable:
//!
//! ```bash
//! # Quiet (warnings only, e.g. dropped ledger lines)
//! RUST_LOG=warn cargo run
//!
//! # Ledger refreshes, commits and recorded orders
//! RUST_LOG=info cargo run 2>ledger.log
//!
//! # Every session input and request payload
//! RUST_LOG=debug cargo run 2>ledger.log
//! ```
//!
//! ## What Gets Traced
//!
//! - **Ledger**: refresh (entry count, dropped lines), commit (lines, units)
//! - **Orders**: id allocation, receipt path
//! - **Actor**: start, each request, shutdown
//! - **Session**: each handled input at `debug`
//!
//! A checkout at `info` looks like:
//!
//! ```text
//! INFO commit_order: Ledger committed lines=1 units=23
//! INFO commit_order: Order recorded order_id=John_Doe_1 path=./orders/John_Doe_1.txt
//! INFO commit_order: Checkout complete order_id=John_Doe_1 total=31.05
//! INFO Checkout ok order_id=John_Doe_1
//! ```

/// Installs the global subscriber. Call once, at start-up.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
