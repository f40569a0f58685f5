use assert_cmd::{Command, cargo::cargo_bin_cmd};
use std::path::Path;

pub fn maintenance_cmd(site: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("maintenance-mode");
    cmd.arg("-C").arg(site);
    cmd
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Writes a `.maintenance` file stamped `age_secs` seconds in the past.
pub fn write_sentinel(site: &Path, age_secs: i64) {
    let contents = format!("<?php $upgrading = {}; ?>", now() - age_secs);
    std::fs::write(site.join(".maintenance"), contents).unwrap();
}

// Not every integration test crate reads the sentinel back.
#[allow(dead_code)]
pub fn read_sentinel_timestamp(site: &Path) -> i64 {
    let contents = std::fs::read_to_string(site.join(".maintenance")).unwrap();
    contents
        .trim_start_matches("<?php $upgrading = ")
        .trim_end_matches("; ?>")
        .parse()
        .expect("sentinel should contain a numeric timestamp")
}
