//! Per-run display configuration.
//!
//! The original tooling mutated process-global color and marker settings;
//! here the configuration is an immutable value constructed once at startup
//! and passed explicitly into the aggregation and plotting services.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Sensor;

/// Marker shape drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    /// Three-sided polygon, the classic plot marker for these charts.
    Triangle,
    Circle,
}

/// Colors and marker settings for a processing run.
///
/// Fixed once at the start of a run and never changed mid-run; one run per
/// process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Color specification for Terra data, `#rrggbb`.
    pub terra_color: String,
    /// Color specification for Aqua data.
    pub aqua_color: String,
    /// Color specification for Landsat 4 (LT4) data.
    pub lt4_color: String,
    /// Color specification for Landsat 5 (LT5) data.
    pub lt5_color: String,
    /// Color specification for Landsat 7 (LE7) data.
    pub le7_color: String,
    /// Plot and legend background color.
    pub bg_color: String,
    /// Marker shape for plotted points.
    pub marker: MarkerShape,
    /// Marker size for plotted points, in pixels.
    pub marker_size: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            // Some brown kinda like dirt
            terra_color: "#664400".to_string(),
            // Some cyan like blue color
            aqua_color: "#00cccc".to_string(),
            lt4_color: "#cc3333".to_string(),
            lt5_color: "#0066cc".to_string(),
            le7_color: "#00cc33".to_string(),
            // A light gray
            bg_color: "#f3f3f3".to_string(),
            marker: MarkerShape::Triangle,
            marker_size: 5.0,
        }
    }
}

impl PlotStyle {
    /// Load a style from a TOML file.
    ///
    /// Missing keys fall back to the defaults, so a file may override any
    /// subset of the settings.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// The display color for a sensor's series.
    ///
    /// `Unknown` never reaches a chart (unrecognized scenes fail before a
    /// series is built) so it maps to plain black.
    pub fn sensor_color(&self, sensor: Sensor) -> &str {
        match sensor {
            Sensor::Terra => &self.terra_color,
            Sensor::Aqua => &self.aqua_color,
            Sensor::LT4 => &self.lt4_color,
            Sensor::LT5 => &self.lt5_color,
            Sensor::LE7 => &self.le7_color,
            Sensor::Unknown => "#000000",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_colors() {
        let style = PlotStyle::default();
        assert_eq!(style.sensor_color(Sensor::Terra), "#664400");
        assert_eq!(style.sensor_color(Sensor::Aqua), "#00cccc");
        assert_eq!(style.sensor_color(Sensor::LT4), "#cc3333");
        assert_eq!(style.sensor_color(Sensor::LT5), "#0066cc");
        assert_eq!(style.sensor_color(Sensor::LE7), "#00cc33");
        assert_eq!(style.bg_color, "#f3f3f3");
        assert_eq!(style.marker, MarkerShape::Triangle);
        assert_eq!(style.marker_size, 5.0);
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "terra_color = \"#123456\"\nmarker = \"circle\"").unwrap();

        let style = PlotStyle::from_file(file.path()).unwrap();
        assert_eq!(style.terra_color, "#123456");
        assert_eq!(style.marker, MarkerShape::Circle);
        // Untouched keys keep their defaults.
        assert_eq!(style.aqua_color, "#00cccc");
        assert_eq!(style.marker_size, 5.0);
    }
}
