//! # Bistro CLI
//!
//! Interactive ordering flow for a single restaurant.
//!
//! ## Module Organization
//! ```text
//! bistro_cli/
//! ├── lib.rs       ◄─── Startup: logging, config, one session
//! ├── config.rs    ◄─── Restaurant name and menu seed (env + defaults)
//! ├── driver.rs    ◄─── InteractionDriver: terminal and scripted
//! ├── prompt.rs    ◄─── Prompt configuration and re-ask loops
//! ├── session.rs   ◄─── Ordering session state machine
//! ├── render.rs    ◄─── Banners and summaries
//! └── error.rs     ◄─── CLI error type
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration
//! 3. Seed the menu catalog into a fresh `OrderBook`
//! 4. Run one session over stdin/stdout
//!
//! Everything lives in process memory and is discarded on exit.

pub mod config;
pub mod driver;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bistro_core::OrderBook;

use config::AppConfig;
use driver::LineDriver;
use error::{CliError, CliResult};
use session::Session;

/// Runs one ordering session against the terminal.
pub fn run() -> CliResult<()> {
    init_tracing();

    let config = AppConfig::load()?;
    let catalog = config.catalog()?;
    info!(
        restaurant = %config.restaurant_name,
        items = catalog.len(),
        "menu loaded"
    );

    let mut book = OrderBook::new(catalog);
    let outcome = {
        let driver = LineDriver::terminal(io::stdin().lock(), io::stdout());
        Session::new(&mut book, driver, config.restaurant_name.clone()).run()
    };

    match outcome {
        Ok(report) => {
            info!(placed = report.placed.len(), ended = ?report.ended, "session finished");
            Ok(())
        }
        Err(CliError::InputClosed) => {
            info!(placed = book.orders().len(), "input closed, ending session");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=bistro_cli=debug,bistro_core=debug` - show rejected answers
///   and order snapshots
/// - Default: WARN, so prompts are not interleaved with log lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
