//! Rewind - bounded password history for vault entries.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rewind::cli::output;
use rewind::cli::{execute, Cli};
use rewind::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("rewind=debug")
        } else {
            EnvFilter::new("rewind=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.store) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            rewind::Error::History(rewind::HistoryError::InvalidIndex { .. }) => {
                Some("run: rewind show <id> to list valid indexes")
            }
            rewind::Error::Store(rewind::error::StoreError::EntryNotFound(_)) => {
                Some("run: rewind set <id> to create the entry")
            }
            rewind::Error::Config(_) => Some("fix config.toml or point REWIND_CONFIG elsewhere"),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
