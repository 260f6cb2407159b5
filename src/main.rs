//! Checkout CLI
//!
//! Prices one basket of scanned items against a JSON price catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --catalog prices.json
//! cargo run -- --strategy async --batch-size 100 --max-concurrent 4
//! RUST_LOG=debug cargo run
//! ```
//!
//! The program loads the catalog, prompts for one line of scanned item codes on
//! stdout, reads it from stdin, and prints the total as a bare integer.
//! Logs go to stderr (default level `warn`, override with `RUST_LOG`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (catalog missing, unreadable or malformed, input/output failure)

use checkout_engine::cli;
use checkout_engine::io::{FileCatalogLoader, PromptReader};
use checkout_engine::session::Session;
use checkout_engine::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut session = Session::new(
        Box::new(FileCatalogLoader::new(args.catalog.clone())),
        Box::new(PromptReader::stdio()),
        strategy,
    );

    let mut output = std::io::stdout();
    if let Err(e) = session.run(&mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
