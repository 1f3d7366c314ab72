//! Chart assembly.
//!
//! Builds fully specified chart descriptions out of a band type's stat
//! records: groups records by sensor, sorts each sensor's series by date,
//! scales the values onto the band type's display range, and computes the
//! padded axis extents. Rasterization is delegated to the injected
//! [`ChartRenderer`].

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::config::PlotStyle;
use crate::error::{Error, Result};
use crate::models::{range_for_band_type, resolve_scene, BandRange, Sensor, StatRecord};
use crate::render::{ChartRenderer, ChartSpec, Rgb, SeriesSpec};
use crate::services::scaling::scale_series;

/// How a chart presents its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Per-date vertical min-to-max segments plus the mean trend line.
    Range,
    /// A single marker+line series for one subject.
    Value,
}

/// The statistic a series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Minimum,
    Maximum,
    Mean,
    StdDev,
}

impl Subject {
    /// Title text for this subject.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Minimum => "Minimum",
            Subject::Maximum => "Maximum",
            Subject::Mean => "Mean",
            Subject::StdDev => "StdDev",
        }
    }
}

/// Days of X-axis padding applied per 365-day increment, each side.
const PAD_DAYS_PER_INCREMENT: i64 = 5;

/// Y-axis padding beyond the display range, each side.
const DISPLAY_MARGIN: f64 = 0.025;

/// One sensor's date-sorted, scaled series.
struct SensorSeries {
    sensor: Sensor,
    dates: Vec<NaiveDate>,
    minimums: Vec<f64>,
    maximums: Vec<f64>,
    means: Vec<f64>,
    stddevs: Vec<f64>,
}

/// Group records by sensor, sort each group by date, and scale all four
/// statistic series onto the band type's scale range. Sensors keep their
/// order of first appearance, which fixes the legend order.
fn build_sensor_series(
    records: &[StatRecord],
    range: &BandRange,
) -> Result<(Vec<SensorSeries>, NaiveDate, NaiveDate)> {
    let mut grouped: Vec<(Sensor, Vec<(NaiveDate, f64, f64, f64, f64)>)> = Vec::new();
    let mut date_min: Option<NaiveDate> = None;
    let mut date_max: Option<NaiveDate> = None;

    for record in records {
        let identity = resolve_scene(record.scene_name());
        let date = identity.date()?;

        date_min = Some(date_min.map_or(date, |d| d.min(date)));
        date_max = Some(date_max.map_or(date, |d| d.max(date)));

        let row = (date, record.minimum, record.maximum, record.mean, record.stddev);
        match grouped.iter_mut().find(|(sensor, _)| *sensor == identity.sensor) {
            Some((_, rows)) => rows.push(row),
            None => grouped.push((identity.sensor, vec![row])),
        }
    }

    let (Some(date_min), Some(date_max)) = (date_min, date_max) else {
        return Err(Error::NoScenes(String::new()));
    };

    let series = grouped
        .into_iter()
        .map(|(sensor, mut rows)| {
            // Date leads the sort key; every other column rides along.
            rows.sort_by_key(|row| row.0);
            let scale = |values: Vec<f64>| {
                scale_series(
                    &values,
                    range.data_min,
                    range.data_max,
                    range.scale_min,
                    range.scale_max,
                )
            };
            SensorSeries {
                sensor,
                dates: rows.iter().map(|r| r.0).collect(),
                minimums: scale(rows.iter().map(|r| r.1).collect()),
                maximums: scale(rows.iter().map(|r| r.2).collect()),
                means: scale(rows.iter().map(|r| r.3).collect()),
                stddevs: scale(rows.iter().map(|r| r.4).collect()),
            }
        })
        .collect();

    Ok((series, date_min, date_max))
}

/// Pad the observed date extent: 5 days on each end for every full
/// 365-day increment spanned, with at least one padding pass.
fn pad_date_range(date_min: NaiveDate, date_max: NaiveDate) -> (NaiveDate, NaiveDate) {
    let spanned_days = (date_max - date_min).num_days();
    let increments = spanned_days / 365 + 1;
    let pad = Duration::days(PAD_DAYS_PER_INCREMENT * increments);
    (date_min - pad, date_max + pad)
}

/// Derive the output file stem from a full chart title: drop the `- `
/// separator, lowercase, spaces to underscores, `_plot` suffix.
fn output_stem(full_title: &str) -> String {
    let mut stem = full_title.replace("- ", "").to_lowercase().replace(' ', "_");
    stem.push_str("_plot");
    stem
}

/// Build the chart description for one plot.
///
/// `subjects` carries the title text; the plotted subject is the first
/// entry for Value plots and is forced to the mean for Range plots (the
/// min/max extents are drawn as vertical segments).
pub fn build_chart(
    plot_name: &str,
    subjects: &[Subject],
    band_type: &str,
    records: &[StatRecord],
    kind: PlotKind,
    style: &PlotStyle,
) -> Result<ChartSpec> {
    let range = range_for_band_type(band_type)?;

    let subject = match kind {
        PlotKind::Range => Subject::Mean,
        PlotKind::Value => *subjects.first().ok_or_else(|| {
            Error::InvalidPlotRequest("a Value plot needs a subject".to_string())
        })?,
    };

    let (sensor_series, date_min, date_max) = build_sensor_series(records, range)
        .map_err(|e| match e {
            Error::NoScenes(_) => Error::NoScenes(band_type.to_string()),
            other => other,
        })?;

    let (x_min, x_max) = pad_date_range(date_min, date_max);
    debug!(
        "date extent {}..{} padded to {}..{}",
        date_min, date_max, x_min, x_max
    );

    let series = sensor_series
        .into_iter()
        .map(|s| {
            let values = match subject {
                Subject::Minimum => &s.minimums,
                Subject::Maximum => &s.maximums,
                Subject::Mean => &s.means,
                Subject::StdDev => &s.stddevs,
            };
            let points = s.dates.iter().copied().zip(values.iter().copied()).collect();
            let range_bars = match kind {
                PlotKind::Range => s
                    .dates
                    .iter()
                    .zip(s.minimums.iter().zip(s.maximums.iter()))
                    .map(|(&date, (&lo, &hi))| (date, lo, hi))
                    .collect(),
                PlotKind::Value => Vec::new(),
            };
            Ok(SeriesSpec {
                sensor: s.sensor,
                color: Rgb::from_hex(style.sensor_color(s.sensor))?,
                points,
                range_bars,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let subject_text: Vec<&str> = subjects.iter().map(Subject::label).collect();
    let title = format!("{} - {}", plot_name, subject_text.join(" "));

    Ok(ChartSpec {
        output_stem: output_stem(&title),
        title,
        x_range: (x_min, x_max),
        y_range: (
            range.display_min - DISPLAY_MARGIN,
            range.display_max + DISPLAY_MARGIN,
        ),
        max_y_ticks: range.max_tick_count,
        background: Rgb::from_hex(&style.bg_color)?,
        marker: style.marker,
        marker_size: style.marker_size,
        series,
    })
}

/// The five chart variants produced per band-type group.
const PLOT_VARIANTS: &[(&[Subject], PlotKind)] = &[
    (
        &[Subject::Minimum, Subject::Maximum, Subject::Mean],
        PlotKind::Range,
    ),
    (&[Subject::Minimum], PlotKind::Value),
    (&[Subject::Maximum], PlotKind::Value),
    (&[Subject::Mean], PlotKind::Value),
    (&[Subject::StdDev], PlotKind::Value),
];

/// Parse a band type's stat files once and render all five chart
/// variants through `renderer`, returning the artifact paths.
pub fn build_band_charts(
    plot_name: &str,
    band_type: &str,
    files: &[PathBuf],
    style: &PlotStyle,
    renderer: &dyn ChartRenderer,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let records = files
        .iter()
        .map(|file| StatRecord::from_file(file))
        .collect::<Result<Vec<_>>>()?;

    let mut artifacts = Vec::with_capacity(PLOT_VARIANTS.len());
    for &(subjects, kind) in PLOT_VARIANTS {
        let spec = build_chart(plot_name, subjects, band_type, &records, kind, style)?;
        artifacts.push(renderer.render(&spec, out_dir)?);
    }
    Ok(artifacts)
}
