//! Band-type orchestration.
//!
//! Walks the band-type catalog in order. For each band type: discover the
//! contributing stat files per sensor, merge each sensor's records into a
//! CSV table, render the five chart variants over the combined pool, and
//! delete the consumed inputs. Strictly sequential; the first failure
//! aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::PlotStyle;
use crate::error::Result;
use crate::models::{BandTypeGroup, BAND_TYPE_CATALOG};
use crate::render::ChartRenderer;
use crate::services::{aggregator, plotting};

/// Files in `dir` matching a catalog glob pattern, sorted for determinism.
fn find_matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();
    let mut files: Vec<PathBuf> = glob::glob(&full_pattern)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| e.into_error())?;
    files.sort();
    Ok(files)
}

/// Process one band type: aggregate per sensor, plot the combined pool,
/// and remove the consumed inputs.
///
/// A band type whose patterns match nothing is silently skipped. When a
/// single sensor contributes, the plots carry that sensor's name; with
/// more than one the plots are labeled as multi-sensor.
pub fn process_band_type(
    group: &BandTypeGroup,
    work_dir: &Path,
    style: &PlotStyle,
    renderer: &dyn ChartRenderer,
) -> Result<()> {
    let mut pooled_files: Vec<PathBuf> = Vec::new();
    let mut sensor_count = 0usize;
    let mut single_sensor_name = "";

    for sensor in group.sensors {
        let files = find_matching_files(work_dir, sensor.pattern)?;
        if files.is_empty() {
            continue;
        }
        sensor_count += 1;
        single_sensor_name = sensor.sensor_name;

        let label = format!("{} {}", sensor.sensor_name, group.band_type);
        aggregator::write_sensor_stats(&label, &files, work_dir)?;
        pooled_files.extend(files);
    }

    if sensor_count == 0 {
        debug!("no stat files for {}", group.band_type);
        return Ok(());
    }

    let plot_name = if sensor_count > 1 {
        format!("Multi Sensor {}", group.band_type)
    } else {
        format!("{} {}", single_sensor_name, group.band_type)
    };
    info!(
        "plotting {} ({} files, {} sensors)",
        plot_name,
        pooled_files.len(),
        sensor_count
    );
    plotting::build_band_charts(
        &plot_name,
        group.band_type,
        &pooled_files,
        style,
        renderer,
        work_dir,
    )?;

    // Inputs do not survive a run; only the CSV tables and charts remain.
    for file in &pooled_files {
        if file.exists() {
            fs::remove_file(file)?;
        }
    }

    Ok(())
}

/// Process every band type in the catalog, in declared order.
pub fn process_all(
    work_dir: &Path,
    style: &PlotStyle,
    renderer: &dyn ChartRenderer,
) -> Result<()> {
    for group in BAND_TYPE_CATALOG {
        process_band_type(group, work_dir, style, renderer)?;
    }
    Ok(())
}
