pub mod categories;
pub mod demo;
pub mod detect;
pub mod extract;
pub mod history;
pub mod keywords;
pub mod suggest;

use std::io::Read;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use scrip::error::Result;

#[derive(Parser)]
#[command(
    name = "scrip",
    about = "Receipt and statement text extraction for expense trackers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a structured transaction candidate from receipt text.
    Extract {
        /// Path to a decoded text file, or - for stdin
        file: String,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Parse tabular transaction-history text into candidates.
    History {
        /// Path to a decoded text file, or - for stdin
        file: String,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
        /// Also export rows to a CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Report whether text looks like a single receipt or a history table.
    Detect {
        /// Path to a decoded text file, or - for stdin
        file: String,
    },
    /// Suggest a category for a merchant name.
    Suggest {
        /// Merchant or description string
        merchant: String,
    },
    /// List the category taxonomy per transaction type.
    Categories,
    /// Manage user merchant keywords.
    Keywords {
        #[command(subcommand)]
        command: KeywordsCommands,
    },
    /// Run the pipeline over built-in sample text.
    Demo,
    /// Generate shell completions.
    Completions {
        /// Shell to generate for (bash, zsh, fish, ...)
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum KeywordsCommands {
    /// Append a keyword to an expense category (stored in settings).
    Add {
        /// Expense category the keyword maps to
        category: String,
        /// Lowercased substring to match against merchant names
        keyword: String,
    },
    /// List built-in and user keywords in priority order.
    List,
}

pub(crate) fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

pub fn completions(shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "scrip", &mut std::io::stdout());
    Ok(())
}
