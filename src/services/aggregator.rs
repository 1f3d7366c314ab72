//! Per-sensor statistics aggregation.
//!
//! Merges all the stat files for one sensor group into a single
//! date-sorted CSV table.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::models::{resolve_scene, StatRecord};

/// CSV header for merged stat tables.
pub const CSV_HEADER: &str = "DATE,MINIMUM,MAXIMUM,MEAN,STDDEV";

/// Lowercase a group label and replace spaces with underscores.
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Combine the stat files for one sensor group into one CSV file.
///
/// Each file contributes one `date,minimum,maximum,mean,stddev` row using
/// the field text as originally written. Rows are sorted lexicographically,
/// which is chronological because the dates are ISO formatted. Writes
/// `<label-normalized>_stats.csv` into `out_dir`, overwriting any previous
/// aggregation, and returns its path.
pub fn write_sensor_stats(label: &str, files: &[PathBuf], out_dir: &Path) -> Result<PathBuf> {
    let mut rows = Vec::with_capacity(files.len());
    for file in files {
        let record = StatRecord::from_file(file)?;
        let identity = resolve_scene(record.scene_name());
        let [minimum, maximum, mean, stddev] = record.raw_fields();
        let row = format!(
            "{},{},{},{},{}",
            identity.iso_date(),
            minimum,
            maximum,
            mean,
            stddev
        );
        debug!("{}: {}", file.display(), row);
        rows.push(row);
    }
    rows.sort();

    let out_path = out_dir.join(format!("{}_stats.csv", normalize_label(label)));
    let mut contents = String::from(CSV_HEADER);
    for row in &rows {
        contents.push('\n');
        contents.push_str(row);
    }
    fs::write(&out_path, contents)?;
    debug!("wrote {} rows to {}", rows.len(), out_path.display());

    Ok(out_path)
}
