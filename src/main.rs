mod cli;
mod clock;
mod commands;
mod maintenance_file;
mod site_fs;
mod status;
mod upgrader;

use cli::{Cli, Command, LogLevel};
use clock::SystemClock;
use commands::{Action, CommandOutcome, MaintenanceModeCommand};
use site_fs::LocalFilesystem;
use std::fmt as stdfmt;
use std::io::{IsTerminal, stderr, stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use upgrader::{SiteUpgrader, StdoutSkin};

struct MaintenanceExitCode;

impl MaintenanceExitCode {
    /// Exit code for `is-active` finding maintenance mode off, and for every
    /// error. Sharing it keeps `is-active` limited to exactly 0 or 1.
    fn failure() -> ExitCode {
        ExitCode::from(1)
    }
}

fn action_from_command(command: Command) -> Action {
    match command {
        Command::Activate { force } => Action::Activate { force },
        Command::Deactivate => Action::Deactivate,
        Command::Status => Action::Status,
        Command::IsActive => Action::IsActive,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_level);

    let root = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let action = action_from_command(cli.command);

    match run(root, action) {
        Ok(CommandOutcome::Success) => ExitCode::SUCCESS,
        Ok(CommandOutcome::Inactive) => MaintenanceExitCode::failure(),
        Err(err) => {
            error!("{err}");
            MaintenanceExitCode::failure()
        }
    }
}

fn run(root: PathBuf, action: Action) -> anyhow::Result<CommandOutcome> {
    let fs = LocalFilesystem::new(root);
    let upgrader = SiteUpgrader::new(fs.clone(), SystemClock, StdoutSkin);
    let mut command = MaintenanceModeCommand::new(fs, upgrader, SystemClock)?;

    let mut out = stdout().lock();
    Ok(command.run(action, &mut out)?)
}

fn init_tracing(verbose: u8, log_level: Option<LogLevel>) {
    let stderr_is_terminal = stderr().is_terminal();
    let formatter = LevelPrefixFormatter { stderr_is_terminal };

    // Explicit flags win over RUST_LOG; RUST_LOG wins over the default.
    let filter = match (log_level, verbose) {
        (Some(level), _) => EnvFilter::new(level.as_filter()),
        (None, 1) => EnvFilter::new("info"),
        (None, v) if v >= 2 => EnvFilter::new("debug"),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = tracing_fmt::layer()
        .event_format(formatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

struct LevelPrefixFormatter {
    stderr_is_terminal: bool,
}

impl<S, N> FormatEvent<S, N> for LevelPrefixFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        if self.stderr_is_terminal {
            match *event.metadata().level() {
                Level::DEBUG => write!(writer, "🔍 ")?,
                Level::INFO => write!(writer, "ℹ️ ")?,
                Level::WARN => write!(writer, "⚠️  ")?,
                Level::ERROR => write!(writer, "❌️ ")?,
                _ => {}
            }
        } else {
            match *event.metadata().level() {
                Level::DEBUG => writer.write_str("DEBUG: ")?,
                Level::INFO => writer.write_str("INFO: ")?,
                Level::WARN => writer.write_str("WARN: ")?,
                Level::ERROR => writer.write_str("ERROR: ")?,
                _ => {}
            }
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
