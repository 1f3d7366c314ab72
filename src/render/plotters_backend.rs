//! PNG rasterization of chart descriptions via plotters.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use plotters::prelude::*;

use super::{ChartRenderer, ChartSpec};
use crate::config::MarkerShape;
use crate::error::{Error, Result};

/// Renders charts to PNG files with a bitmap backend.
///
/// The default surface is 1100x850 px, an 11x8.5 inch page at 100 dpi.
pub struct PlottersRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        PlottersRenderer {
            width: 1100,
            height: 850,
        }
    }
}

impl PlottersRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        PlottersRenderer { width, height }
    }

    fn draw(
        &self,
        spec: &ChartSpec,
        path: &Path,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let background = RGBColor(spec.background.0, spec.background.1, spec.background.2);
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&background)?;

        // Dates are plotted as day numbers and labeled back as ISO dates.
        let x_min = spec.x_range.0.num_days_from_ce();
        let x_max = spec.x_range.1.num_days_from_ce();

        let mut chart = ChartBuilder::on(&root)
            .margin(24)
            .x_label_area_size(48)
            .y_label_area_size(64)
            .build_cartesian_2d(x_min..x_max, spec.y_range.0..spec.y_range.1)?;

        chart
            .configure_mesh()
            .x_labels(8)
            .y_labels(spec.max_y_ticks)
            .x_label_formatter(&|days| {
                NaiveDate::from_num_days_from_ce_opt(*days)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            })
            .x_desc("Date")
            .y_desc(spec.title.as_str())
            .draw()?;

        let marker_size = spec.marker_size.round().max(1.0) as i32;
        for series in &spec.series {
            let color = RGBColor(series.color.0, series.color.1, series.color.2);

            // Vertical min-to-max segments for Range charts.
            chart.draw_series(series.range_bars.iter().map(|&(date, low, high)| {
                let day = date.num_days_from_ce();
                PathElement::new(vec![(day, low), (day, high)], color.stroke_width(1))
            }))?;

            let points: Vec<(i32, f64)> = series
                .points
                .iter()
                .map(|&(date, value)| (date.num_days_from_ce(), value))
                .collect();

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(1),
                ))?
                .label(series.sensor.id())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });

            match spec.marker {
                MarkerShape::Triangle => {
                    chart.draw_series(points.iter().map(|&point| {
                        TriangleMarker::new(point, marker_size, color.filled())
                    }))?;
                }
                MarkerShape::Circle => {
                    chart.draw_series(
                        points
                            .iter()
                            .map(|&point| Circle::new(point, marker_size, color.filled())),
                    )?;
                }
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperMiddle)
            .background_style(&background.mix(0.9))
            .border_style(&BLACK)
            .label_font(("sans-serif", 14))
            .draw()?;

        // Flush and release the drawing surface before the next chart.
        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, spec: &ChartSpec, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join(format!("{}.png", spec.output_stem));
        self.draw(spec, &path)
            .map_err(|e| Error::Render(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }
}
