use clap::{Parser, Subcommand};

pub const DEFAULT_HEAD: i64 = 10;

/// Command-line interface definition for takt
/// CLI application to track working hours in a CSV ledger
#[derive(Parser)]
#[command(
    name = "takt",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: check in/out and summarize hours against a daily target",
    long_about = "Takt keeps a CSV ledger of check-in/check-out events (newest first).\n\n\
                  Environment:\n  \
                  TAKT_FILE          ledger path (default: ~/takt.csv)\n  \
                  TAKT_TARGET_HOURS  daily target, decimal or H:MM (default: 8.0)\n  \
                  TAKT_EDITOR        editor for `takt edit` (falls back to $EDITOR)\n  \
                  TAKT_LOG           log level (default: warn)"
)]
pub struct Cli {
    /// Override ledger path (useful for tests or a second ledger)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check in or out (toggles automatically)
    #[command(alias = "c")]
    Check {
        /// Free-text note stored with the event
        note: Option<String>,
    },

    /// Show recent records, newest first
    #[command(alias = "display")]
    Cat {
        /// Number of records to show (-1 for all)
        #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_HEAD)]
        head: i64,
    },

    /// Daily summary with balance calculation
    #[command(alias = "d")]
    Day {
        /// Number of days to show (-1 for all)
        #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_HEAD)]
        head: i64,
    },

    /// Weekly (ISO week) summary with balance calculation
    #[command(alias = "w")]
    Week {
        #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_HEAD)]
        head: i64,
    },

    /// Monthly summary with balance calculation
    #[command(alias = "m")]
    Month {
        #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_HEAD)]
        head: i64,
    },

    /// Yearly summary with balance calculation
    #[command(alias = "y")]
    Year {
        #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_HEAD)]
        head: i64,
    },

    /// Visual grid showing daily activity for a year
    Grid {
        /// Year to show (default: current year)
        year: Option<String>,

        #[arg(long, help = "Print the symbol legend")]
        legend: bool,
    },

    /// Open the ledger in your editor
    #[command(alias = "e")]
    Edit,

    /// Commit and push the ledger with git
    #[command(alias = "cm")]
    Commit,

    /// Print the resolved configuration
    Config,
}
