//! ttrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Track) => cli::commands::track::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(Commands::Check) => cli::commands::check::handle(cfg),
        Some(Commands::Users) => cli::commands::users::handle(cfg),
        Some(Commands::Tasks) => cli::commands::tasks::handle(cfg),
        Some(cmd @ Commands::Start { .. }) => cli::commands::start::handle(cmd, cfg),
        Some(cmd @ Commands::Stop { .. }) => cli::commands::stop::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply the command-line DB override
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // test mode keeps the filesystem untouched apart from the DB itself
    if !cli.test {
        logging::init_file_logger(&cfg.log_dir)?;
    }

    dispatch(&cli, &cfg)
}
