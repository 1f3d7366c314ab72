//! Scene identity resolution.
//!
//! A scene's acquisition date and sensor are encoded in its filename. Each
//! supported convention is a [`NamingConvention`] implementation; the
//! conventions are evaluated in a fixed declared order and the first match
//! wins. Filenames matching no convention resolve to the unknown identity
//! rather than failing; a calendar date is only required (and enforced)
//! when one is actually needed downstream.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Instrument/platform that produced a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
    Terra,
    Aqua,
    LT4,
    LT5,
    LE7,
    Unknown,
}

impl Sensor {
    /// Short identifier used in legends and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Sensor::Terra => "Terra",
            Sensor::Aqua => "Aqua",
            Sensor::LT4 => "LT4",
            Sensor::LT5 => "LT5",
            Sensor::LE7 => "LE7",
            Sensor::Unknown => "unk",
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Acquisition date and sensor derived from a scene filename.
///
/// Immutable once computed and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneIdentity {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub sensor: Sensor,
}

impl SceneIdentity {
    /// The fallback identity for filenames matching no convention.
    pub fn unknown() -> Self {
        SceneIdentity {
            year: 0,
            month: 0,
            day: 0,
            sensor: Sensor::Unknown,
        }
    }

    /// The acquisition date as a calendar date.
    ///
    /// Fails for the unknown identity (and any identity that does not form
    /// a valid date), carrying the sensor id for diagnostics.
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| Error::UnrecognizedScene(self.iso_date()))
    }

    /// Zero-padded `YYYY-MM-DD` string. Total: the unknown identity
    /// formats as `0000-00-00`.
    pub fn iso_date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Number of days in a month under the proleptic Gregorian calendar.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Convert a day-of-year to `(month, day_of_month)`.
///
/// Returns `None` when the day-of-year does not fall within the given
/// year (zero, or past the final day of December).
pub fn month_day_from_doy(year: i32, day_of_year: u32) -> Option<(u32, u32)> {
    if day_of_year == 0 {
        return None;
    }
    let mut day = day_of_year;
    for month in 1..=12 {
        let month_days = days_in_month(year, month);
        if day <= month_days {
            return Some((month, day));
        }
        day -= month_days;
    }
    None
}

/// One filename convention: how to recognize it and how to decode the
/// year, day-of-year, and sensor out of a matching name.
pub trait NamingConvention: Send + Sync {
    /// Whether this convention claims the filename.
    fn matches(&self, filename: &str) -> bool;

    /// Decode a matching filename. `None` when the name matches the
    /// convention shape but its date fields are unusable.
    fn decode(&self, filename: &str) -> Option<SceneIdentity>;
}

/// MODIS convention: `MOD…`/`MYD…` names carry an `AYYYYDDD` segment after
/// the first dot.
struct ModisNaming {
    prefix: &'static str,
    sensor: Sensor,
}

impl NamingConvention for ModisNaming {
    fn matches(&self, filename: &str) -> bool {
        filename.starts_with(self.prefix)
    }

    fn decode(&self, filename: &str) -> Option<SceneIdentity> {
        let date_element = filename.split('.').nth(1)?;
        let year: i32 = date_element.get(1..5)?.parse().ok()?;
        let day_of_year: u32 = date_element.get(5..8)?.parse().ok()?;
        let (month, day) = month_day_from_doy(year, day_of_year)?;
        Some(SceneIdentity {
            year,
            month,
            day,
            sensor: self.sensor,
        })
    }
}

/// Landsat convention: scene ids carry the year at offsets 9-12 and the
/// day-of-year at offsets 13-15.
struct LandsatNaming {
    tag: &'static str,
    sensor: Sensor,
}

impl NamingConvention for LandsatNaming {
    fn matches(&self, filename: &str) -> bool {
        filename.contains(self.tag)
    }

    fn decode(&self, filename: &str) -> Option<SceneIdentity> {
        let year: i32 = filename.get(9..13)?.parse().ok()?;
        let day_of_year: u32 = filename.get(13..16)?.parse().ok()?;
        let (month, day) = month_day_from_doy(year, day_of_year)?;
        Some(SceneIdentity {
            year,
            month,
            day,
            sensor: self.sensor,
        })
    }
}

/// The supported conventions, in evaluation order. First match wins.
static NAMING_CONVENTIONS: Lazy<Vec<Box<dyn NamingConvention>>> = Lazy::new(|| {
    vec![
        Box::new(ModisNaming {
            prefix: "MOD",
            sensor: Sensor::Terra,
        }),
        Box::new(ModisNaming {
            prefix: "MYD",
            sensor: Sensor::Aqua,
        }),
        Box::new(LandsatNaming {
            tag: "LT4",
            sensor: Sensor::LT4,
        }),
        Box::new(LandsatNaming {
            tag: "LT5",
            sensor: Sensor::LT5,
        }),
        Box::new(LandsatNaming {
            tag: "LE7",
            sensor: Sensor::LE7,
        }),
    ]
});

/// Resolve a scene filename to its identity.
///
/// Total: filenames claimed by no convention, or whose date fields cannot
/// be decoded, resolve to [`SceneIdentity::unknown`].
pub fn resolve_scene(filename: &str) -> SceneIdentity {
    for convention in NAMING_CONVENTIONS.iter() {
        if convention.matches(filename) {
            return convention
                .decode(filename)
                .unwrap_or_else(SceneIdentity::unknown);
        }
    }
    SceneIdentity::unknown()
}
