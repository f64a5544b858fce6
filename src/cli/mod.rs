//! Command-line interface.

pub mod check;
pub mod clear;
pub mod completions;
pub mod output;
pub mod restore;
pub mod set;
pub mod show;

use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::history::HistoryManager;
use crate::core::sink::TracingSink;
use crate::core::store::EntryStore;
use crate::error::{Result, ValidationError};

/// Rewind - bounded password history for vault entries.
#[derive(Parser)]
#[command(
    name = "rewind",
    about = "Bounded password history for vault entries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Entry store file (default: .rewind.json)
    #[arg(long, global = true, env = constants::STORE_ENV)]
    pub store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show an entry's password history
    Show {
        /// Entry id
        id: String,
        /// Print passwords unmasked
        #[arg(long)]
        reveal: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change an entry's password, recording the old one
    Set {
        /// Entry id (created if missing)
        id: String,
        /// New password (read from stdin or prompted if omitted)
        password: Option<String>,
        /// Why the password changed
        #[arg(short, long)]
        reason: Option<String>,
    },

    /// Restore a previous password
    Restore {
        /// Entry id
        id: String,
        /// History index (0 = most recent)
        index: usize,
    },

    /// Delete an entry's password history
    Clear {
        /// Entry id
        id: String,
    },

    /// Check whether a password was used before
    Check {
        /// Entry id
        id: String,
        /// Password to look for (read from stdin or prompted if omitted)
        password: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, store: Option<PathBuf>) -> Result<()> {
    let store = store.unwrap_or_else(EntryStore::default_path);

    match command {
        Command::Show { id, reveal, json } => show::execute(&Context::load(store)?, &id, reveal, json),
        Command::Set {
            id,
            password,
            reason,
        } => set::execute(&mut Context::load(store)?, &id, password, reason.as_deref()),
        Command::Restore { id, index } => restore::execute(&mut Context::load(store)?, &id, index),
        Command::Clear { id } => clear::execute(&mut Context::load(store)?, &id),
        Command::Check { id, password } => check::execute(&Context::load(store)?, &id, password),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Everything a command needs: settings, the manager they configure, and the store.
pub struct Context {
    pub config: Config,
    pub manager: HistoryManager<TracingSink>,
    pub store: EntryStore,
}

impl Context {
    /// Load config and the store at `store_path`.
    ///
    /// # Errors
    ///
    /// Returns config or store errors.
    pub fn load(store_path: PathBuf) -> Result<Self> {
        let config = Config::load()?;
        let manager = config.manager(TracingSink);
        let store = EntryStore::load(store_path)?;
        Ok(Self {
            config,
            manager,
            store,
        })
    }
}

/// Reject empty entry ids.
pub(crate) fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId.into());
    }
    Ok(())
}

/// Obtain a password from the argument, piped stdin, or a hidden prompt.
///
/// `confirm` asks twice when prompting interactively.
pub(crate) fn read_password(
    arg: Option<String>,
    prompt: &str,
    confirm: bool,
) -> Result<Zeroizing<String>> {
    let value = match arg {
        Some(value) => Zeroizing::new(value),
        None if !io::stdin().is_terminal() => {
            let mut input = Zeroizing::new(String::new());
            io::stdin().read_line(&mut input)?;
            Zeroizing::new(input.trim_end_matches(['\r', '\n']).to_string())
        }
        None => {
            let mut dialog = dialoguer::Password::new().with_prompt(prompt);
            if confirm {
                dialog = dialog.with_confirmation("Confirm password", "passwords do not match");
            }
            Zeroizing::new(dialog.interact()?)
        }
    };

    if value.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }
    Ok(value)
}
