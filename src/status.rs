use crate::clock::Clock;
use crate::maintenance_file::{MaintenanceRecord, SENTINEL_FILE_NAME};
use crate::site_fs::SiteFilesystem;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Age after which a sentinel file no longer puts the site in maintenance.
pub const STALENESS_WINDOW_SECS: i64 = 10 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub active: bool,
    /// `None` when no sentinel file exists.
    pub record: Option<MaintenanceRecord>,
    /// False when the sentinel exists but carries no readable timestamp.
    pub timestamp_found: bool,
}

/// Answers whether maintenance mode is active by inspecting the sentinel
/// file under the site root.
#[derive(Debug, Clone)]
pub struct MaintenanceStatusChecker<C> {
    clock: C,
}

impl<C: Clock> MaintenanceStatusChecker<C> {
    pub fn new(clock: C) -> Self {
        MaintenanceStatusChecker { clock }
    }

    pub fn is_active<F: SiteFilesystem + ?Sized>(&self, fs: &F) -> bool {
        self.check(fs).active
    }

    /// Computes the full status report.
    ///
    /// A sentinel without a readable `upgrading = N;` marker is treated as
    /// written at timestamp 0, so it reads as expired. A sentinel that exists
    /// but cannot be read is handled the same way, as if it were empty. Both
    /// cases are logged as warnings; neither fails.
    pub fn check<F: SiteFilesystem + ?Sized>(&self, fs: &F) -> StatusReport {
        let path = sentinel_path(fs);

        if !fs.exists(&path) {
            debug!("No maintenance file at {}", path.display());
            return StatusReport {
                active: false,
                record: None,
                timestamp_found: false,
            };
        }

        let contents = fs.get_contents(&path).unwrap_or_else(|e| {
            warn!("Unable to read {}: {}", path.display(), e);
            String::new()
        });
        let (record, timestamp_found) = MaintenanceRecord::parse(&contents);
        if !timestamp_found {
            warn!("Unable to read the maintenance file timestamp, non-numeric value detected.");
        }

        let elapsed = self.clock.now().saturating_sub(record.upgrading_at);
        info!(
            "Maintenance file {} written at {}, {}s ago",
            path.display(),
            record.upgrading_at,
            elapsed
        );

        StatusReport {
            active: elapsed < STALENESS_WINDOW_SECS,
            record: Some(record),
            timestamp_found,
        }
    }
}

pub fn sentinel_path<F: SiteFilesystem + ?Sized>(fs: &F) -> PathBuf {
    fs.root_path().join(SENTINEL_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::site_fs::testing::MemoryFilesystem;
    use crate::site_fs::LocalFilesystem;
    use tempfile::TempDir;

    const WRITTEN_AT: i64 = 1_700_000_000;
    const SENTINEL: &str = "<?php $upgrading = 1700000000; ?>";

    fn checker_at(now: i64) -> MaintenanceStatusChecker<FixedClock> {
        MaintenanceStatusChecker::new(FixedClock(now))
    }

    #[test]
    fn missing_file_is_inactive() {
        let fs = MemoryFilesystem::new("/site");

        let report = checker_at(WRITTEN_AT).check(&fs);
        assert!(!report.active);
        assert_eq!(report.record, None);
    }

    #[test]
    fn fresh_file_is_active() {
        let fs = MemoryFilesystem::new("/site").with_file(".maintenance", SENTINEL);

        let report = checker_at(WRITTEN_AT + 300).check(&fs);
        assert!(report.active);
        assert!(report.timestamp_found);
        assert_eq!(
            report.record,
            Some(MaintenanceRecord {
                upgrading_at: WRITTEN_AT
            })
        );
    }

    #[test]
    fn stale_file_is_inactive() {
        let fs = MemoryFilesystem::new("/site").with_file(".maintenance", SENTINEL);

        assert!(!checker_at(WRITTEN_AT + 700).is_active(&fs));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let fs = MemoryFilesystem::new("/site").with_file(".maintenance", SENTINEL);

        assert!(checker_at(WRITTEN_AT + 599).is_active(&fs));
        assert!(!checker_at(WRITTEN_AT + 600).is_active(&fs));
    }

    #[test]
    fn future_timestamp_is_active() {
        let fs = MemoryFilesystem::new("/site").with_file(".maintenance", SENTINEL);

        assert!(checker_at(WRITTEN_AT - 3600).is_active(&fs));
    }

    #[test]
    fn unreadable_timestamp_is_treated_as_expired() {
        let fs = MemoryFilesystem::new("/site")
            .with_file(".maintenance", "<?php $upgrading = time(); ?>");

        let report = checker_at(WRITTEN_AT).check(&fs);
        assert!(!report.active);
        assert!(!report.timestamp_found);
        assert_eq!(report.record, Some(MaintenanceRecord { upgrading_at: 0 }));
    }

    #[test]
    fn unreadable_timestamp_counts_from_epoch() {
        let fs = MemoryFilesystem::new("/site").with_file(".maintenance", "");

        assert!(checker_at(STALENESS_WINDOW_SECS - 1).is_active(&fs));
    }

    #[test]
    fn checks_sentinel_in_site_root_on_disk() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".maintenance"), SENTINEL).unwrap();
        let fs = LocalFilesystem::new(temp.path());

        assert!(checker_at(WRITTEN_AT + 1).is_active(&fs));
        assert!(!checker_at(WRITTEN_AT + 601).is_active(&fs));
    }

    #[test]
    fn unreadable_sentinel_is_treated_as_expired() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".maintenance")).unwrap();
        let fs = LocalFilesystem::new(temp.path());

        let report = checker_at(WRITTEN_AT).check(&fs);
        assert!(!report.active);
        assert!(!report.timestamp_found);
        assert_eq!(report.record, Some(MaintenanceRecord { upgrading_at: 0 }));
    }

    #[test]
    fn sentinel_in_other_directory_is_ignored() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("wp-content");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join(".maintenance"), SENTINEL).unwrap();
        let fs = LocalFilesystem::new(temp.path());

        assert!(!checker_at(WRITTEN_AT).is_active(&fs));
    }
}
