//! Service layer: aggregation, scaling, chart assembly, orchestration.

pub mod aggregator;
pub mod plotting;
pub mod processor;
pub mod scaling;

pub use aggregator::write_sensor_stats;
pub use plotting::{build_band_charts, build_chart, PlotKind, Subject};
pub use processor::{process_all, process_band_type};
pub use scaling::{scale_series, scale_to_range};
