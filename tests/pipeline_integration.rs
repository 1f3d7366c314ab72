use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;

use scene_trends::config::PlotStyle;
use scene_trends::models::{BandTypeGroup, BAND_TYPE_CATALOG};
use scene_trends::render::RecordingRenderer;
use scene_trends::services::{process_all, process_band_type};

fn write_stat_file(dir: &Path, name: &str, minimum: f64, maximum: f64, mean: f64, stddev: f64) {
    let contents = format!(
        "FILENAME={}\nMINIMUM={}\nMAXIMUM={}\nMEAN={}\nSTDDEV={}\n",
        name, minimum, maximum, mean, stddev
    );
    fs::write(dir.join(name), contents).expect("write stat file");
}

fn catalog_group(band_type: &str) -> &'static BandTypeGroup {
    BAND_TYPE_CATALOG
        .iter()
        .find(|group| group.band_type == band_type)
        .expect("band type in catalog")
}

#[test]
fn test_single_sensor_end_to_end() {
    let dir = TempDir::new().unwrap();
    // Three Landsat 5 scenes spanning two calendar years, written out of
    // date order: 2012-04-09, 2010-07-19, 2011-05-30.
    write_stat_file(dir.path(), "LT50290302012100_sr_band3.stats", 300.0, 9300.0, 4300.0, 230.0);
    write_stat_file(dir.path(), "LT50290302010200_sr_band3.stats", 100.0, 9100.0, 4100.0, 210.0);
    write_stat_file(dir.path(), "LT50290302011150_sr_band3.stats", 200.0, 9200.0, 4200.0, 220.0);

    let renderer = RecordingRenderer::new();
    let style = PlotStyle::default();
    process_band_type(catalog_group("SR Red"), dir.path(), &style, &renderer).unwrap();

    // Merged CSV: exactly three rows, ascending by date.
    let csv = fs::read_to_string(dir.path().join("landsat_5_sr_red_stats.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "DATE,MINIMUM,MAXIMUM,MEAN,STDDEV");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("2010-07-19,"));
    assert!(lines[2].starts_with("2011-05-30,"));
    assert!(lines[3].starts_with("2012-04-09,"));

    // Five chart variants, Range first.
    let specs = renderer.recorded();
    assert_eq!(specs.len(), 5);
    assert_eq!(specs[0].title, "Landsat 5 SR Red - Minimum Maximum Mean");
    assert_eq!(specs[1].title, "Landsat 5 SR Red - Minimum");
    assert_eq!(specs[2].title, "Landsat 5 SR Red - Maximum");
    assert_eq!(specs[3].title, "Landsat 5 SR Red - Mean");
    assert_eq!(specs[4].title, "Landsat 5 SR Red - StdDev");
    assert_eq!(
        specs[0].output_stem,
        "landsat_5_sr_red_minimum_maximum_mean_plot"
    );

    // The X-axis lower bound precedes the earliest date by 5 days per
    // 365-day increment spanned; 2010-07-19..2012-04-09 spans more than
    // one increment.
    let earliest = NaiveDate::from_ymd_opt(2010, 7, 19).unwrap();
    let latest = NaiveDate::from_ymd_opt(2012, 4, 9).unwrap();
    let increments = (latest - earliest).num_days() / 365 + 1;
    assert!(increments >= 2);
    assert!((earliest - specs[0].x_range.0).num_days() >= 5 * increments);
    assert!((specs[0].x_range.1 - latest).num_days() >= 5 * increments);

    // Range plot carries the min-max segments; the Value plots do not.
    assert_eq!(specs[0].series[0].range_bars.len(), 3);
    assert!(specs[1].series[0].range_bars.is_empty());

    // Consumed inputs are deleted.
    assert!(!dir.path().join("LT50290302010200_sr_band3.stats").exists());
    assert!(!dir.path().join("LT50290302011150_sr_band3.stats").exists());
    assert!(!dir.path().join("LT50290302012100_sr_band3.stats").exists());
}

#[test]
fn test_multi_sensor_run_over_full_catalog() {
    let dir = TempDir::new().unwrap();
    write_stat_file(dir.path(), "LT50290302011150_sr_ndvi.stats", -100.0, 8000.0, 3500.0, 400.0);
    write_stat_file(dir.path(), "LE70290302011100_sr_ndvi.stats", -200.0, 8200.0, 3600.0, 410.0);
    write_stat_file(
        dir.path(),
        "MOD13Q1.A2011033.h09v05.006_NDVI.stats",
        -300.0,
        8400.0,
        3700.0,
        420.0,
    );

    let renderer = RecordingRenderer::new();
    let style = PlotStyle::default();
    process_all(dir.path(), &style, &renderer).unwrap();

    // Only the NDVI band type had input; five charts, multi-sensor label.
    let specs = renderer.recorded();
    assert_eq!(specs.len(), 5);
    assert_eq!(specs[0].title, "Multi Sensor NDVI - Minimum Maximum Mean");
    assert_eq!(specs[0].series.len(), 3);

    // Each contributing sensor got its own merged CSV.
    assert!(dir.path().join("landsat_5_ndvi_stats.csv").exists());
    assert!(dir.path().join("landsat_7_ndvi_stats.csv").exists());
    assert!(dir.path().join("terra_ndvi_stats.csv").exists());
}

#[test]
fn test_catalog_with_no_matching_files_produces_nothing() {
    let dir = TempDir::new().unwrap();
    // A file whose name matches no catalog pattern is never touched.
    fs::write(dir.path().join("README.txt"), "not a stat file").unwrap();

    let renderer = RecordingRenderer::new();
    let style = PlotStyle::default();
    process_all(dir.path(), &style, &renderer).unwrap();

    assert!(renderer.recorded().is_empty());
    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["README.txt"]);
}

#[test]
fn test_missing_required_key_aborts_the_band_type() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("LT50290302011150_sr_band3.stats"),
        "minimum=1\nmaximum=2\nmean=3\n",
    )
    .unwrap();

    let renderer = RecordingRenderer::new();
    let style = PlotStyle::default();
    let result = process_band_type(catalog_group("SR Red"), dir.path(), &style, &renderer);

    assert!(result.is_err());
    // Nothing was plotted and the input survives the failed run.
    assert!(renderer.recorded().is_empty());
    assert!(dir.path().join("LT50290302011150_sr_band3.stats").exists());
}
