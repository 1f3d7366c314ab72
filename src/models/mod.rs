//! Domain model: stat records, scene identities, band-type configuration.

pub mod catalog;
pub mod ranges;
pub mod scene;
pub mod stats;

pub use catalog::{BandTypeGroup, SensorPattern, BAND_TYPE_CATALOG};
pub use ranges::{range_for_band_type, BandRange};
pub use scene::{month_day_from_doy, resolve_scene, SceneIdentity, Sensor};
pub use stats::StatRecord;
