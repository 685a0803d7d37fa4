//! # Bistro Terminal Ordering
//!
//! Interactive ordering and billing for a single customer session.
//!
//! ## Startup Sequence
//! ```text
//! 1. Load configuration (env vars with defaults)
//! 2. Initialize tracing (filter from BISTRO_LOG, logs to stderr)
//! 3. Run one ordering session over stdin/stdout
//! ```

mod config;
mod observers;
mod prompt;
mod session;

use std::io;

use bistro_core::OrderSequence;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::prompt::Prompter;
use crate::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    init_tracing(&config);

    info!(receipt_json = config.receipt_json, "starting Bistro terminal ordering");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(prompter, OrderSequence::new(), config);

    match session.run() {
        Ok(Some(receipt)) => {
            info!(order_id = %receipt.order_id, total = %receipt.total, "session complete");
            Ok(())
        }
        Ok(None) => {
            info!("session ended without an order");
            Ok(())
        }
        Err(e) => {
            error!(%e, "session failed");
            Err(e.into())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the order transcript on stdout stays clean.
/// Override the filter with `BISTRO_LOG` (e.g. `BISTRO_LOG=debug`).
fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
