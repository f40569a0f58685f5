use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod help_text;

/// Activate, deactivate or check the maintenance mode of a site
#[derive(Parser, Debug)]
#[command(
    name = "maintenance-mode",
    version,
    about,
    long_about = help_text::ROOT_LONG_ABOUT
)]
pub struct Cli {
    /// Root directory of the site (defaults to the current directory)
    #[arg(short = 'C', long = "path", value_name = "DIRECTORY", global = true)]
    pub path: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug). Takes precedence over RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Set the log level explicitly. Takes precedence over RUST_LOG.
    #[arg(
        long,
        value_name = "LEVEL",
        value_enum,
        global = true,
        conflicts_with = "verbose"
    )]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Activate maintenance mode
    #[command(long_about = help_text::ACTIVATE_LONG_ABOUT)]
    Activate {
        /// Activate even if maintenance mode is already active
        #[arg(long)]
        force: bool,
    },

    /// Deactivate maintenance mode
    #[command(long_about = help_text::DEACTIVATE_LONG_ABOUT)]
    Deactivate,

    /// Display maintenance mode status
    #[command(long_about = help_text::STATUS_LONG_ABOUT)]
    Status,

    /// Exit 0 if maintenance mode is active, 1 otherwise
    #[command(long_about = help_text::IS_ACTIVE_LONG_ABOUT)]
    IsActive,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
