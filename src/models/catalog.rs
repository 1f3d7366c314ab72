//! Band-type catalog.
//!
//! Fixed configuration driving the processing run: for each tracked band
//! type, an ordered list of (filename glob, sensor display name) pairs.
//! The MODIS surface-reflectance bands are listed under the Landsat band
//! they map to (MODIS band 1 ↔ Landsat band 3, and so on).

/// One (glob pattern, sensor display name) pair within a band type.
#[derive(Debug, Clone, Copy)]
pub struct SensorPattern {
    pub pattern: &'static str,
    pub sensor_name: &'static str,
}

/// One tracked band type: the label used for range lookup, plot titles and
/// output names, plus the file patterns contributing to it.
#[derive(Debug, Clone, Copy)]
pub struct BandTypeGroup {
    pub band_type: &'static str,
    pub sensors: &'static [SensorPattern],
}

pub const L4_SATELLITE_NAME: &str = "Landsat 4";
pub const L5_SATELLITE_NAME: &str = "Landsat 5";
pub const L7_SATELLITE_NAME: &str = "Landsat 7";
pub const TERRA_SATELLITE_NAME: &str = "Terra";
pub const AQUA_SATELLITE_NAME: &str = "Aqua";

macro_rules! sensor_patterns {
    ($(($pattern:expr, $name:expr)),+ $(,)?) => {
        &[$(SensorPattern { pattern: $pattern, sensor_name: $name }),+]
    };
}

const SR_BLUE: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_band1.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_band1.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_band1.stats", L7_SATELLITE_NAME),
    ("MOD*sur_refl*3.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*3.stats", AQUA_SATELLITE_NAME),
];

const SR_GREEN: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_band2.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_band2.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_band2.stats", L7_SATELLITE_NAME),
    ("MOD*sur_refl*4.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*4.stats", AQUA_SATELLITE_NAME),
];

const SR_RED: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_band3.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_band3.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_band3.stats", L7_SATELLITE_NAME),
    ("MOD*sur_refl*1.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*1.stats", AQUA_SATELLITE_NAME),
];

const SR_NIR: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_band4.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_band4.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_band4.stats", L7_SATELLITE_NAME),
    ("MOD*sur_refl*2.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*2.stats", AQUA_SATELLITE_NAME),
];

const SR_SWIR1: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_band5.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_band5.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_band5.stats", L7_SATELLITE_NAME),
    ("MOD*sur_refl*6.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*6.stats", AQUA_SATELLITE_NAME),
];

const SR_SWIR2: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_band7.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_band7.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_band7.stats", L7_SATELLITE_NAME),
    ("MOD*sur_refl*7.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*7.stats", AQUA_SATELLITE_NAME),
];

// MODIS band 5 has no Landsat counterpart and is tracked on its own.
const SR_SWIR_MODIS_B5: &[SensorPattern] = sensor_patterns![
    ("MOD*sur_refl*b05.stats", TERRA_SATELLITE_NAME),
    ("MYD*sur_refl*b05.stats", AQUA_SATELLITE_NAME),
];

const SR_THERMAL: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band6.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band6.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band6.stats", L7_SATELLITE_NAME),
];

const TOA_BLUE: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band1.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band1.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band1.stats", L7_SATELLITE_NAME),
];

const TOA_GREEN: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band2.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band2.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band2.stats", L7_SATELLITE_NAME),
];

const TOA_RED: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band3.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band3.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band3.stats", L7_SATELLITE_NAME),
];

const TOA_NIR: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band4.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band4.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band4.stats", L7_SATELLITE_NAME),
];

const TOA_SWIR1: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band5.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band5.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band5.stats", L7_SATELLITE_NAME),
];

const TOA_SWIR2: &[SensorPattern] = sensor_patterns![
    ("LT4*_toa_band7.stats", L4_SATELLITE_NAME),
    ("LT5*_toa_band7.stats", L5_SATELLITE_NAME),
    ("LE7*_toa_band7.stats", L7_SATELLITE_NAME),
];

const EMIS_20: &[SensorPattern] = sensor_patterns![
    ("MOD*Emis_20.stats", TERRA_SATELLITE_NAME),
    ("MYD*Emis_20.stats", AQUA_SATELLITE_NAME),
];

const EMIS_22: &[SensorPattern] = sensor_patterns![
    ("MOD*Emis_22.stats", TERRA_SATELLITE_NAME),
    ("MYD*Emis_22.stats", AQUA_SATELLITE_NAME),
];

const EMIS_23: &[SensorPattern] = sensor_patterns![
    ("MOD*Emis_23.stats", TERRA_SATELLITE_NAME),
    ("MYD*Emis_23.stats", AQUA_SATELLITE_NAME),
];

const EMIS_29: &[SensorPattern] = sensor_patterns![
    ("MOD*Emis_29.stats", TERRA_SATELLITE_NAME),
    ("MYD*Emis_29.stats", AQUA_SATELLITE_NAME),
];

const EMIS_31: &[SensorPattern] = sensor_patterns![
    ("MOD*Emis_31.stats", TERRA_SATELLITE_NAME),
    ("MYD*Emis_31.stats", AQUA_SATELLITE_NAME),
];

const EMIS_32: &[SensorPattern] = sensor_patterns![
    ("MOD*Emis_32.stats", TERRA_SATELLITE_NAME),
    ("MYD*Emis_32.stats", AQUA_SATELLITE_NAME),
];

const LST_DAY: &[SensorPattern] = sensor_patterns![
    ("MOD*LST_Day_*.stats", TERRA_SATELLITE_NAME),
    ("MYD*LST_Day_*.stats", AQUA_SATELLITE_NAME),
];

const LST_NIGHT: &[SensorPattern] = sensor_patterns![
    ("MOD*LST_Night_*.stats", TERRA_SATELLITE_NAME),
    ("MYD*LST_Night_*.stats", AQUA_SATELLITE_NAME),
];

const NDVI: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_ndvi.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_ndvi.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_ndvi.stats", L7_SATELLITE_NAME),
    ("MOD*_NDVI.stats", TERRA_SATELLITE_NAME),
    ("MYD*_NDVI.stats", AQUA_SATELLITE_NAME),
];

const EVI: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_evi.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_evi.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_evi.stats", L7_SATELLITE_NAME),
    ("MOD*_EVI.stats", TERRA_SATELLITE_NAME),
    ("MYD*_EVI.stats", AQUA_SATELLITE_NAME),
];

const SAVI: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_savi.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_savi.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_savi.stats", L7_SATELLITE_NAME),
];

const MSAVI: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_msavi.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_msavi.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_msavi.stats", L7_SATELLITE_NAME),
];

const NBR: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_nbr.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_nbr.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_nbr.stats", L7_SATELLITE_NAME),
];

const NBR2: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_nbr2.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_nbr2.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_nbr2.stats", L7_SATELLITE_NAME),
];

const NDMI: &[SensorPattern] = sensor_patterns![
    ("LT4*_sr_ndmi.stats", L4_SATELLITE_NAME),
    ("LT5*_sr_ndmi.stats", L5_SATELLITE_NAME),
    ("LE7*_sr_ndmi.stats", L7_SATELLITE_NAME),
];

/// All tracked band types, in processing order.
pub const BAND_TYPE_CATALOG: &[BandTypeGroup] = &[
    BandTypeGroup { band_type: "SR Blue", sensors: SR_BLUE },
    BandTypeGroup { band_type: "SR Green", sensors: SR_GREEN },
    BandTypeGroup { band_type: "SR Red", sensors: SR_RED },
    BandTypeGroup { band_type: "SR NIR", sensors: SR_NIR },
    BandTypeGroup { band_type: "SR SWIR1", sensors: SR_SWIR1 },
    BandTypeGroup { band_type: "SR SWIR2", sensors: SR_SWIR2 },
    BandTypeGroup { band_type: "SR SWIR B5", sensors: SR_SWIR_MODIS_B5 },
    BandTypeGroup { band_type: "SR Thermal", sensors: SR_THERMAL },
    BandTypeGroup { band_type: "TOA Blue", sensors: TOA_BLUE },
    BandTypeGroup { band_type: "TOA Green", sensors: TOA_GREEN },
    BandTypeGroup { band_type: "TOA Red", sensors: TOA_RED },
    BandTypeGroup { band_type: "TOA NIR", sensors: TOA_NIR },
    BandTypeGroup { band_type: "TOA SWIR1", sensors: TOA_SWIR1 },
    BandTypeGroup { band_type: "TOA SWIR2", sensors: TOA_SWIR2 },
    BandTypeGroup { band_type: "Emis Band 20", sensors: EMIS_20 },
    BandTypeGroup { band_type: "Emis Band 22", sensors: EMIS_22 },
    BandTypeGroup { band_type: "Emis Band 23", sensors: EMIS_23 },
    BandTypeGroup { band_type: "Emis Band 29", sensors: EMIS_29 },
    BandTypeGroup { band_type: "Emis Band 31", sensors: EMIS_31 },
    BandTypeGroup { band_type: "Emis Band 32", sensors: EMIS_32 },
    BandTypeGroup { band_type: "LST Day", sensors: LST_DAY },
    BandTypeGroup { band_type: "LST Night", sensors: LST_NIGHT },
    BandTypeGroup { band_type: "NDVI", sensors: NDVI },
    BandTypeGroup { band_type: "EVI", sensors: EVI },
    BandTypeGroup { band_type: "SAVI", sensors: SAVI },
    BandTypeGroup { band_type: "MSAVI", sensors: MSAVI },
    BandTypeGroup { band_type: "NBR", sensors: NBR },
    BandTypeGroup { band_type: "NBR2", sensors: NBR2 },
    BandTypeGroup { band_type: "NDMI", sensors: NDMI },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ranges::range_for_band_type;

    #[test]
    fn test_every_catalog_label_resolves_to_a_range() {
        for group in BAND_TYPE_CATALOG {
            assert!(
                range_for_band_type(group.band_type).is_ok(),
                "no range for {}",
                group.band_type
            );
        }
    }

    #[test]
    fn test_every_group_has_patterns() {
        for group in BAND_TYPE_CATALOG {
            assert!(!group.sensors.is_empty());
            for sensor in group.sensors {
                assert!(sensor.pattern.ends_with(".stats"));
            }
        }
    }
}
