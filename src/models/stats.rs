//! Stat file parsing.
//!
//! A stat file is a small text file of `key=value` lines holding the
//! minimum/maximum/mean/standard-deviation summary for one scene and one
//! band. Keys are matched case-insensitively; the four summary fields are
//! required and must parse as floats.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Read a stat file as a sequence of `(key, value)` pairs.
///
/// Each non-empty line is trimmed, lowercased, and split on the first `=`.
/// A line without `=` yields the whole line as a key with an empty value;
/// such a record fails later at required-key validation rather than here.
pub fn read_stat_lines(
    path: &Path,
) -> Result<impl Iterator<Item = io::Result<(String, String)>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let line = line.trim().to_lowercase();
            if line.is_empty() {
                return None;
            }
            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (line, String::new()),
            };
            Some(Ok((key, value)))
        }
        Err(e) => Some(Err(e)),
    }))
}

/// Required stat-file keys, in CSV column order.
const REQUIRED_KEYS: [&str; 4] = ["minimum", "maximum", "mean", "stddev"];

/// Summary statistics for one scene and one band.
///
/// Holds both the parsed float values (used for scaling and plotting) and
/// the original field text (emitted verbatim into the merged CSV tables).
#[derive(Debug, Clone)]
pub struct StatRecord {
    /// Path of the stat file this record came from. The file name encodes
    /// the scene identity.
    pub source: PathBuf,
    pub minimum: f64,
    pub maximum: f64,
    pub mean: f64,
    pub stddev: f64,
    raw: [String; 4],
}

impl StatRecord {
    /// Parse a stat file, requiring the four summary fields.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("reading stats from {}", path.display());

        let mut fields: HashMap<String, String> = HashMap::new();
        for pair in read_stat_lines(path)? {
            let (key, value) = pair?;
            fields.insert(key, value);
        }

        let mut raw: [String; 4] = Default::default();
        let mut values = [0f64; 4];
        for (slot, &key) in REQUIRED_KEYS.iter().enumerate() {
            let text = fields.get(key).ok_or(Error::MissingStatKey {
                key,
                file: path.to_path_buf(),
            })?;
            values[slot] = text.parse().map_err(|_| Error::InvalidStatValue {
                key,
                value: text.clone(),
                file: path.to_path_buf(),
            })?;
            raw[slot] = text.clone();
        }

        Ok(StatRecord {
            source: path.to_path_buf(),
            minimum: values[0],
            maximum: values[1],
            mean: values[2],
            stddev: values[3],
            raw,
        })
    }

    /// File name of the source scene, used for identity resolution.
    pub fn scene_name(&self) -> &str {
        self.source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// The four field values as originally written, in CSV column order.
    pub fn raw_fields(&self) -> [&str; 4] {
        [&self.raw[0], &self.raw[1], &self.raw[2], &self.raw[3]]
    }

    #[cfg(test)]
    pub(crate) fn test_record(
        source: PathBuf,
        minimum: f64,
        maximum: f64,
        mean: f64,
        stddev: f64,
        raw: [String; 4],
    ) -> Self {
        StatRecord {
            source,
            minimum,
            maximum,
            mean,
            stddev,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_stat_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write stats");
        file
    }

    #[test]
    fn test_parses_all_required_fields() {
        let file = write_stat_file(
            "FILENAME=scene.img\nMINIMUM=12.5\nMAXIMUM=8800.0\nMEAN=4301.25\nSTDDEV=210.7\n",
        );
        let record = StatRecord::from_file(file.path()).expect("parse");

        assert_eq!(record.minimum, 12.5);
        assert_eq!(record.maximum, 8800.0);
        assert_eq!(record.mean, 4301.25);
        assert_eq!(record.stddev, 210.7);
        assert_eq!(record.raw_fields(), ["12.5", "8800.0", "4301.25", "210.7"]);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let file = write_stat_file("Minimum=1\nMAXIMUM=2\nmean=3\nStdDev=4\n");
        let record = StatRecord::from_file(file.path()).expect("parse");
        assert_eq!(record.stddev, 4.0);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let file = write_stat_file("minimum=1\nmaximum=2\nmean=3\n");
        let err = StatRecord::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingStatKey { key: "stddev", .. }));
    }

    #[test]
    fn test_malformed_required_line_is_an_error() {
        // No '=' on the minimum line: the whole line becomes a key with an
        // empty value, which fails float parsing.
        let file = write_stat_file("minimum\nmaximum=2\nmean=3\nstddev=4\n");
        let err = StatRecord::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidStatValue { key: "minimum", .. }));
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let file = write_stat_file("minimum=low\nmaximum=2\nmean=3\nstddev=4\n");
        let err = StatRecord::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidStatValue { key: "minimum", .. }));
    }

    #[test]
    fn test_blank_lines_and_extra_keys_are_ignored() {
        let file = write_stat_file("\nminimum=1\n\nmaximum=2\nmean=3\nstddev=4\nvalid=yes\n");
        assert!(StatRecord::from_file(file.path()).is_ok());
    }
}
