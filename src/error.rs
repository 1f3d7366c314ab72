//! Error types for the statistics pipeline.

use std::path::PathBuf;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering every failure family in the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stat file is missing one of the four required fields.
    #[error("missing required key '{key}' in {file}")]
    MissingStatKey { key: &'static str, file: PathBuf },

    /// A required stat field could not be parsed as a float.
    #[error("invalid value '{value}' for key '{key}' in {file}")]
    InvalidStatValue {
        key: &'static str,
        value: String,
        file: PathBuf,
    },

    /// No entry in the range registry matches the band-type label.
    /// Indicates a catalog/registry mismatch, never ignored.
    #[error("no data range registered for band type '{0}'")]
    UnknownBandType(String),

    /// A scene filename matched no naming convention but a calendar date
    /// was required.
    #[error("unrecognized scene filename '{0}'")]
    UnrecognizedScene(String),

    /// A plot was requested with an unusable subject set.
    #[error("invalid plot request: {0}")]
    InvalidPlotRequest(String),

    /// A plot was requested over a record set yielding no dated scenes.
    #[error("no scenes available to plot for band type '{0}'")]
    NoScenes(String),

    /// A display color could not be parsed as `#rrggbb`.
    #[error("invalid color specification '{0}'")]
    InvalidColor(String),

    /// A configuration file could not be read or deserialized.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An external command exited abnormally or with nonzero status.
    #[error("command failed [{command}]: {output}")]
    CommandFailed { command: String, output: String },

    /// Local and remote copies of a published file disagree.
    #[error("checksum mismatch between {local} and {remote}")]
    ChecksumMismatch { local: String, remote: String },

    /// Chart rasterization failed in the rendering backend.
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// A catalog glob pattern is malformed.
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
