use clap::{Parser, Subcommand};

/// Command-line interface definition for ttrack
/// Interactive time tracker backed by SQLite
#[derive(Parser)]
#[command(
    name = "ttrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small personal time tracker: pick a user, start a task, watch the clock, stop it",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, no file logger)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive tracker opens
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Open the interactive tracking form
    Track,

    /// Connect to the store and report which tracked tables it contains
    Check,

    /// List all known usernames
    Users,

    /// List all task names ever tracked
    Tasks,

    /// Start a task without the interactive form
    Start {
        /// Username (created on first use)
        username: String,

        /// Task name
        task: String,
    },

    /// Stop an open task without the interactive form
    Stop {
        /// Username
        username: String,

        /// Task name
        task: String,
    },
}
