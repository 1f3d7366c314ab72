//! Band-type data ranges.
//!
//! Each band-type category has a fixed (data, scale, display) range triple
//! used to normalize raw statistics onto a display-friendly axis, plus a
//! bound on the number of Y-axis tick intervals.

use crate::error::{Error, Result};

/// Numeric ranges and tick policy for one band-type category.
///
/// `data_max` is always strictly greater than `data_min`, so the scaler's
/// denominator is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRange {
    /// The minimum value represented in the data.
    pub data_min: f64,
    /// The maximum value represented in the data.
    pub data_max: f64,
    /// `data_min` is scaled to this value.
    pub scale_min: f64,
    /// `data_max` is scaled to this value.
    pub scale_max: f64,
    /// The minimum value to display on the plot.
    pub display_min: f64,
    /// The maximum value to display on the plot.
    pub display_max: f64,
    /// Bound on the number of spaces between Y-axis tick marks. Includes
    /// the space between the display bounds and the outermost ticks.
    pub max_tick_count: usize,
}

const REFLECTANCE: BandRange = BandRange {
    data_min: 0.0,
    data_max: 10000.0,
    scale_min: 0.0,
    scale_max: 1.0,
    display_min: 0.0,
    display_max: 1.0,
    max_tick_count: 12,
};

const INDEX: BandRange = BandRange {
    data_min: -1000.0,
    data_max: 10000.0,
    scale_min: -0.1,
    scale_max: 1.0,
    display_min: -0.1,
    display_max: 1.0,
    max_tick_count: 13,
};

const LST: BandRange = BandRange {
    data_min: 7500.0,
    data_max: 65535.0,
    scale_min: 0.0,
    scale_max: 1.0,
    display_min: 0.0,
    display_max: 1.0,
    max_tick_count: 12,
};

const EMIS: BandRange = BandRange {
    data_min: 1.0,
    data_max: 255.0,
    scale_min: 0.0,
    scale_max: 1.0,
    display_min: 0.0,
    display_max: 1.0,
    max_tick_count: 12,
};

/// Category prefixes and their ranges, checked in declaration order.
///
/// Ordering is load-bearing: `NBR2` must precede `NBR` so that longer,
/// more specific prefixes win.
pub const BAND_RANGES: &[(&str, BandRange)] = &[
    ("SR", REFLECTANCE),
    ("TOA", REFLECTANCE),
    ("NDVI", INDEX),
    ("EVI", INDEX),
    ("SAVI", INDEX),
    ("MSAVI", INDEX),
    ("NBR2", INDEX),
    ("NBR", INDEX),
    ("NDMI", INDEX),
    ("LST", LST),
    ("Emis", EMIS),
];

/// Look up the range spec for a band-type label by prefix match.
///
/// A label with no matching prefix is a configuration error: the catalog
/// names a band type the registry does not know.
pub fn range_for_band_type(band_type: &str) -> Result<&'static BandRange> {
    BAND_RANGES
        .iter()
        .find(|(prefix, _)| band_type.starts_with(prefix))
        .map(|(_, range)| range)
        .ok_or_else(|| Error::UnknownBandType(band_type.to_string()))
}
