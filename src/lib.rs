//! takt library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::level_filters::LevelFilter;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Cat { .. } => cli::commands::cat::handle(&cli.command, cfg),
        Commands::Day { .. }
        | Commands::Week { .. }
        | Commands::Month { .. }
        | Commands::Year { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Grid { .. } => cli::commands::grid::handle(&cli.command, cfg),
        Commands::Edit => cli::commands::edit::handle(cfg),
        Commands::Commit => cli::commands::commit::handle(cfg),
        Commands::Config => cli::commands::config::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics to stderr
    utils::logging::enable_logging(cli.verbose.then_some(LevelFilter::DEBUG));

    // 3️⃣ load config ONCE
    let mut cfg = Config::load();

    // 4️⃣ ledger override from the command line
    if let Some(custom) = &cli.file {
        cfg.file = expand_tilde(custom);
    }

    dispatch(&cli, &cfg)
}
