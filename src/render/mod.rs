//! Chart descriptions and the renderer seam.
//!
//! The plot builder produces a fully specified [`ChartSpec`]; turning that
//! into pixels is the job of a [`ChartRenderer`] implementation injected
//! into the orchestrator. Production uses the plotters backend; tests use
//! the in-memory [`RecordingRenderer`].

pub mod plotters_backend;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::config::MarkerShape;
use crate::error::{Error, Result};
use crate::models::Sensor;

pub use plotters_backend::PlottersRenderer;

/// An RGB color parsed from a `#rrggbb` specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse a `#rrggbb` hex specification.
    pub fn from_hex(spec: &str) -> Result<Self> {
        let digits = spec.strip_prefix('#').unwrap_or(spec);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(spec.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColor(spec.to_string()))
        };
        Ok(Rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

/// One sensor's contribution to a chart.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub sensor: Sensor,
    pub color: Rgb,
    /// Marker+line values, ascending by date.
    pub points: Vec<(NaiveDate, f64)>,
    /// Vertical min-to-max segments, one per date. Empty for Value plots.
    pub range_bars: Vec<(NaiveDate, f64, f64)>,
}

/// Everything a renderer needs to rasterize one chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Full chart title, e.g. `Multi Sensor NDVI - Minimum Maximum Mean`.
    pub title: String,
    /// Output file name without directory or extension.
    pub output_stem: String,
    /// Padded X-axis (date) bounds.
    pub x_range: (NaiveDate, NaiveDate),
    /// Padded Y-axis bounds.
    pub y_range: (f64, f64),
    /// Bound on the number of Y-axis tick intervals.
    pub max_y_ticks: usize,
    /// Plot and legend background color.
    pub background: Rgb,
    pub marker: MarkerShape,
    pub marker_size: f64,
    /// One entry per contributing sensor; legend order follows this order.
    pub series: Vec<SeriesSpec>,
}

/// Renders a chart description into an image artifact.
pub trait ChartRenderer {
    /// Render `spec` into `out_dir`, returning the path of the artifact.
    fn render(&self, spec: &ChartSpec, out_dir: &Path) -> Result<PathBuf>;
}

/// In-memory renderer capturing every spec it is handed. Lets the pipeline
/// be exercised without rasterizing anything.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    specs: Mutex<Vec<ChartSpec>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The specs rendered so far, in order.
    pub fn recorded(&self) -> Vec<ChartSpec> {
        self.specs.lock().expect("renderer lock poisoned").clone()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, spec: &ChartSpec, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join(format!("{}.png", spec.output_stem));
        self.specs
            .lock()
            .expect("renderer lock poisoned")
            .push(spec.clone());
        Ok(path)
    }
}
