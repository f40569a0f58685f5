use crate::clock::Clock;
use crate::maintenance_file::render_sentinel;
use crate::site_fs::{SiteFilesystem, SiteFsError};
use crate::status::sentinel_path;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum UpgraderError {
    #[error("Filesystem error: {0}")]
    SiteFs(#[from] SiteFsError),
    #[error("Site root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Site root does not exist: {0}")]
    MissingRoot(PathBuf),
}

/// Owns the write side of maintenance mode.
pub trait Upgrader {
    /// Prepares the upgrader for use. Must be called before
    /// [`Upgrader::maintenance_mode`].
    fn init(&mut self) -> Result<(), UpgraderError>;

    fn maintenance_mode(&mut self, enable: bool) -> Result<(), UpgraderError>;
}

/// Receives the progress lines an upgrader reports to the operator.
pub trait UpgraderSkin {
    fn feedback(&mut self, message: &str);
}

impl<T: UpgraderSkin + ?Sized> UpgraderSkin for &mut T {
    fn feedback(&mut self, message: &str) {
        (**self).feedback(message);
    }
}

/// Prints feedback on stdout, ahead of the command's own result line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSkin;

impl UpgraderSkin for StdoutSkin {
    fn feedback(&mut self, message: &str) {
        println!("{message}");
    }
}

/// [`Upgrader`] that toggles maintenance by writing or deleting the sentinel
/// file through a [`SiteFilesystem`].
#[derive(Debug)]
pub struct SiteUpgrader<F, C, S> {
    fs: F,
    clock: C,
    skin: S,
}

impl<F: SiteFilesystem, C: Clock, S: UpgraderSkin> SiteUpgrader<F, C, S> {
    pub fn new(fs: F, clock: C, skin: S) -> Self {
        SiteUpgrader { fs, clock, skin }
    }
}

impl<F: SiteFilesystem, C: Clock, S: UpgraderSkin> Upgrader for SiteUpgrader<F, C, S> {
    fn init(&mut self) -> Result<(), UpgraderError> {
        let root = self.fs.root_path();
        if !self.fs.exists(root) {
            return Err(UpgraderError::MissingRoot(root.to_path_buf()));
        }
        if !self.fs.is_dir(root) {
            return Err(UpgraderError::NotADirectory(root.to_path_buf()));
        }
        Ok(())
    }

    fn maintenance_mode(&mut self, enable: bool) -> Result<(), UpgraderError> {
        let path = sentinel_path(&self.fs);

        if enable {
            self.skin.feedback("Enabling Maintenance mode...");
            let now = self.clock.now();
            self.fs.put_contents(&path, &render_sentinel(now))?;
            debug!("Wrote {} with timestamp {}", path.display(), now);
        } else if self.fs.exists(&path) {
            self.skin.feedback("Disabling Maintenance mode...");
            self.fs.delete(&path)?;
            debug!("Removed {}", path.display());
        }

        Ok(())
    }
}
