use crate::clock::Clock;
use crate::site_fs::SiteFilesystem;
use crate::status::MaintenanceStatusChecker;
use crate::upgrader::{Upgrader, UpgraderError};
use std::io::Write;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Maintenance mode already activated.")]
    AlreadyActive,
    #[error("Maintenance mode already deactivated.")]
    AlreadyInactive,
    #[error(transparent)]
    Upgrader(#[from] UpgraderError),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Activate { force: bool },
    Deactivate,
    Status,
    IsActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// `is-active` found maintenance mode off.
    Inactive,
}

/// Activates, deactivates or reports the maintenance mode of one site.
///
/// The filesystem is used for status checks only; all writes go through the
/// upgrader.
pub struct MaintenanceModeCommand<F, U, C> {
    fs: F,
    upgrader: U,
    checker: MaintenanceStatusChecker<C>,
}

impl<F: SiteFilesystem, U: Upgrader, C: Clock> MaintenanceModeCommand<F, U, C> {
    /// Builds the command and initializes the upgrader.
    pub fn new(fs: F, mut upgrader: U, clock: C) -> Result<Self, UpgraderError> {
        upgrader.init()?;
        Ok(MaintenanceModeCommand {
            fs,
            upgrader,
            checker: MaintenanceStatusChecker::new(clock),
        })
    }

    pub fn run<W: Write>(
        &mut self,
        action: Action,
        out: &mut W,
    ) -> Result<CommandOutcome, CommandError> {
        debug!("Running {:?} in {}", action, self.fs.root_path().display());
        match action {
            Action::Activate { force } => self.activate(force, out),
            Action::Deactivate => self.deactivate(out),
            Action::Status => self.status(out),
            Action::IsActive => self.is_active(),
        }
    }

    fn activate<W: Write>(
        &mut self,
        force: bool,
        out: &mut W,
    ) -> Result<CommandOutcome, CommandError> {
        if self.checker.is_active(&self.fs) && !force {
            return Err(CommandError::AlreadyActive);
        }

        self.upgrader.maintenance_mode(true)?;
        writeln!(out, "Success: Activated Maintenance mode.")?;
        Ok(CommandOutcome::Success)
    }

    fn deactivate<W: Write>(&mut self, out: &mut W) -> Result<CommandOutcome, CommandError> {
        if !self.checker.is_active(&self.fs) {
            return Err(CommandError::AlreadyInactive);
        }

        self.upgrader.maintenance_mode(false)?;
        writeln!(out, "Success: Deactivated Maintenance mode.")?;
        Ok(CommandOutcome::Success)
    }

    fn status<W: Write>(&self, out: &mut W) -> Result<CommandOutcome, CommandError> {
        let report = self.checker.check(&self.fs);
        if let Some(record) = report.record {
            debug!(
                "Maintenance file timestamp {} (readable: {})",
                record.upgrading_at, report.timestamp_found
            );
        }

        let status = if report.active {
            "active"
        } else {
            "not active"
        };
        writeln!(out, "Maintenance mode is {status}.")?;
        Ok(CommandOutcome::Success)
    }

    fn is_active(&self) -> Result<CommandOutcome, CommandError> {
        if self.checker.is_active(&self.fs) {
            Ok(CommandOutcome::Success)
        } else {
            Ok(CommandOutcome::Inactive)
        }
    }
}
