//! Shared fixtures for integration tests

use std::io::Write;
use std::path::PathBuf;

/// Header row of the fight dataset CSVs used throughout the tests
pub const DATASET_HEADER: &str = "Date,RedFighter,BlueFighter,Winner,Finish,WeightClass";

/// Unique throwaway path under the system temp directory
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cagerank-it-{}-{}", std::process::id(), name))
}

/// Write a throwaway CSV dataset and return its path
pub fn write_dataset(name: &str, rows: &[&str]) -> PathBuf {
    let path = temp_path(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", DATASET_HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

/// Best-effort removal of test artifacts
pub fn cleanup(paths: &[PathBuf]) {
    for path in paths {
        std::fs::remove_file(path).ok();
    }
}
