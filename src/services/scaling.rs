//! Linear rescaling of statistic values onto display ranges.

/// Map `value` from `[data_min, data_max]` onto `[target_min, target_max]`.
///
/// Orientation-preserving affine map: `data_max` lands exactly on
/// `target_max` and `data_min` exactly on `target_min`. The caller must
/// guarantee `data_max != data_min`; the range registry enforces this for
/// every band type.
pub fn scale_to_range(
    value: f64,
    data_min: f64,
    data_max: f64,
    target_min: f64,
    target_max: f64,
) -> f64 {
    target_max - ((target_max - target_min) * (data_max - value)) / (data_max - data_min)
}

/// Scale a whole series element-wise.
pub fn scale_series(
    values: &[f64],
    data_min: f64,
    data_max: f64,
    target_min: f64,
    target_max: f64,
) -> Vec<f64> {
    values
        .iter()
        .map(|&v| scale_to_range(v, data_min, data_max, target_min, target_max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints_map_exactly() {
        assert_eq!(scale_to_range(10000.0, 0.0, 10000.0, 0.0, 1.0), 1.0);
        assert_eq!(scale_to_range(0.0, 0.0, 10000.0, 0.0, 1.0), 0.0);
        assert_eq!(scale_to_range(-1000.0, -1000.0, 10000.0, -0.1, 1.0), -0.1);
        assert_eq!(scale_to_range(10000.0, -1000.0, 10000.0, -0.1, 1.0), 1.0);
    }

    #[test]
    fn test_identity_when_ranges_match() {
        for value in [0.0, 0.25, 0.5, 0.99, 1.0] {
            let scaled = scale_to_range(value, 0.0, 1.0, 0.0, 1.0);
            assert!((scaled - value).abs() < 1e-12);
        }
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(scale_to_range(5000.0, 0.0, 10000.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_scale_series() {
        let scaled = scale_series(&[0.0, 5000.0, 10000.0], 0.0, 10000.0, 0.0, 1.0);
        assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
    }

    proptest! {
        /// The map is affine: output differences are proportional to input
        /// differences.
        #[test]
        fn test_affine_difference_ratio(
            x1 in 0.0f64..4000.0,
            x2 in 4000.0f64..8000.0,
            x3 in 8000.0f64..10000.0,
        ) {
            prop_assume!(x2 - x1 > 1.0 && x3 - x2 > 1.0);
            let scale = |x| scale_to_range(x, 0.0, 10000.0, -0.1, 1.0);
            let input_ratio = (x2 - x1) / (x3 - x2);
            let output_ratio = (scale(x2) - scale(x1)) / (scale(x3) - scale(x2));
            prop_assert!((input_ratio - output_ratio).abs() < 1e-6 * input_ratio.max(1.0));
        }

        #[test]
        fn test_identity_property(x in -1000.0f64..10000.0) {
            let scaled = scale_to_range(x, -1000.0, 10000.0, -1000.0, 10000.0);
            prop_assert!((scaled - x).abs() < 1e-9 * x.abs().max(1.0));
        }
    }
}
