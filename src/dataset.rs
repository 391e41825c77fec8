//! Bout dataset ingestion and table export
//!
//! Reads the fight dataset CSVs (several files are concatenated into one
//! record set), normalizes rows, and hands the processors a clean,
//! date-sorted bout list. Rows whose date cannot be parsed are dropped and
//! counted rather than failing the run; the processors never see a raw
//! label. Also writes the output tables.

use crate::error::{RatingError, Result};
use crate::types::{Bout, FinishMethod, Outcome};
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Date format used by the fight dataset (e.g. `28-02-24`)
const DATE_FORMAT: &str = "%d-%m-%y";

/// One row as it appears in the source CSV
#[derive(Debug, Deserialize)]
struct RawBout {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "RedFighter")]
    red: String,
    #[serde(rename = "BlueFighter")]
    blue: String,
    #[serde(rename = "Winner")]
    winner: String,
    #[serde(rename = "Finish", default)]
    finish: Option<String>,
    #[serde(rename = "WeightClass", default)]
    weight_class: Option<String>,
}

/// Load and concatenate bout datasets, returning bouts sorted ascending by
/// date. The sort is stable, so same-day bouts keep their file order.
pub fn load_bouts<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Bout>> {
    let mut bouts = Vec::new();
    let mut dropped = 0usize;

    for path in paths {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open dataset {}", path.display()))?;

        for row in reader.deserialize() {
            let raw: RawBout = row.map_err(|e| RatingError::DatasetFormat {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            match normalize_row(raw) {
                Some(bout) => bouts.push(bout),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {} rows with unparsable dates", dropped);
    }

    if bouts.is_empty() {
        let shown = paths
            .iter()
            .map(|p| p.as_ref().display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RatingError::EmptyDataset { path: shown }.into());
    }

    bouts.sort_by(|a, b| a.date.cmp(&b.date));

    Ok(bouts)
}

/// Trim a row's fields, parse its date, and resolve its labels.
///
/// Returns `None` when the date does not parse; every other irregularity is
/// absorbed by a default (unrecognized winner label becomes a draw, missing
/// finish becomes the other-bucket, blank division becomes absent).
fn normalize_row(raw: RawBout) -> Option<Bout> {
    let date = match NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            debug!("Unparsable date {:?} for {} vs {}", raw.date, raw.red, raw.blue);
            return None;
        }
    };

    let finish = raw
        .finish
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty());
    let division = raw
        .weight_class
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string);

    Some(Bout {
        date,
        red: raw.red.trim().to_string(),
        blue: raw.blue.trim().to_string(),
        outcome: Outcome::from_label(&raw.winner),
        method: FinishMethod::from_label(finish),
        division,
    })
}

/// Write one output table as CSV, headers included
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output table {}", path.display()))?;

    for row in rows {
        writer.serialize(row).map_err(|e| RatingError::ExportFailed {
            message: e.to_string(),
        })?;
    }

    writer.flush().map_err(|e| RatingError::ExportFailed {
        message: e.to_string(),
    })?;

    Ok(())
}
