//! # QuickMart CLI Library
//!
//! Wiring for the interactive console checkout. The binary in `main.rs`
//! only calls [`run`]; everything here is reachable from tests.
//!
//! ## Module Organization
//! ```text
//! quickmart_cli/
//! ├── lib.rs           ◄─── You are here (startup & run)
//! ├── config.rs        ◄─── Environment configuration
//! ├── catalog_file.rs  ◄─── Standard catalog or JSON file
//! ├── session.rs       ◄─── The interactive flow
//! └── error.rs         ◄─── CliError
//! ```
//!
//! ## Streams
//! - stdin: the three prompts
//! - stdout: stock reports, messages, receipt
//! - stderr: tracing output

pub mod catalog_file;
pub mod config;
pub mod error;
pub mod session;

use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog_file::load_catalog;
use config::{CliConfig, DEFAULT_LOG_FILTER};
use session::Session;

/// Runs one checkout session on the process's stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration (QUICKMART_LOG, QUICKMART_CATALOG)              │
/// │  2. Initialize logging                                                 │
/// │     • RUST_LOG if set, else QUICKMART_LOG, else "warn"                 │
/// │  3. Build the catalog (standard or file)                               │
/// │  4. Run the session                                                    │
/// │                                                                         │
/// │  Any failure is logged at ERROR and the function returns normally,     │
/// │  so the process exit code is always 0.                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    let config = CliConfig::load();
    let log_filter = config
        .as_ref()
        .map_or(DEFAULT_LOG_FILTER, |config| config.log_filter.as_str());
    init_tracing(log_filter);

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return;
        }
    };

    info!(catalog = ?config.catalog_path, "Starting QuickMart checkout");

    let mut catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "could not build catalog");
            return;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run(&mut catalog) {
        Ok(outcome) => info!(
            customer = %outcome.customer_name,
            purchased = outcome.receipt.is_some(),
            "session finished"
        ),
        Err(err) => error!(error = %err, "session aborted"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=quickmart_cli=trace` - Trace this crate only
/// - Otherwise `default_filter`
///
/// Output goes to stderr so it never interleaves with the receipt.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
