//! # scene-trends
//!
//! Batch pipeline that turns per-scene statistic summary files (one
//! `key=value` text file per satellite scene and spectral band) into merged
//! per-sensor time-series CSV tables and normalized trend charts.
//!
//! ## Features
//!
//! - **Stat parsing**: read `*.stats` files into validated records
//! - **Scene identity**: derive acquisition date and sensor from scene
//!   filenames (MODIS Terra/Aqua and Landsat 4/5/7 naming conventions)
//! - **Aggregation**: merge a sensor's records into date-sorted CSV tables
//! - **Plotting**: build fully specified chart descriptions (scaled series,
//!   axis extents, tick policy, legend) for a pluggable renderer
//! - **Staging**: fetch the working set from a remote host and publish
//!   results back with per-file checksum verification
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: stat records, scene identities, band-type ranges, catalog
//! - [`services`]: aggregation, scaling, chart assembly, orchestration
//! - [`render`]: the chart description types and renderer seam
//! - [`staging`]: remote file staging and command execution
//! - [`config`]: immutable per-run display configuration

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod staging;

pub use error::{Error, Result};
