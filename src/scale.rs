use crate::{units::UNITS_SIZE, utils::render::render_general};

/// Values in `[SIMPLE_THRESHOLD, small_threshold)` are printed as-is rather
/// than being given a small-unit prefix.
pub const SIMPLE_THRESHOLD: f64 = 0.01;

/// A value split into a rendered mantissa and a unit-table exponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scaled {
    pub mantissa: String,
    pub exponent: i64,
}

/// Scales `val` by powers of `one_k` until it lands in a readable band.
///
/// `precision` only moves the band edges: the threshold is
/// `max(1, 10^-precision)`, so the rendered mantissa is never rounded to
/// `precision` digits. When no table step brings the value into the band the
/// unscaled value is returned with exponent 0.
pub fn to_exponent_and_mantissa(val: f64, precision: i32, one_k: f64) -> Scaled {
    let mut mantissa = String::new();
    let mut val = val;

    if val < 0.0 {
        mantissa.push('-');
        val = -val;
    }

    let adjusted_threshold = f64::max(1.0, 1.0 / 10f64.powi(precision));
    let big_threshold = adjusted_threshold * one_k - 1.0;
    let small_threshold = adjusted_threshold;

    let mut exponent = 0;
    let mut rendered = val;

    if val > big_threshold {
        match scale_down(val, one_k, big_threshold) {
            Some((scaled, steps)) => {
                rendered = scaled;
                exponent = steps;
            }
            None => tracing::debug!(val, one_k, "value too large for unit table"),
        }
    } else if val < small_threshold && val < SIMPLE_THRESHOLD {
        match scale_up(val, one_k, small_threshold) {
            Some((scaled, steps)) => {
                rendered = scaled;
                exponent = -steps;
            }
            None => tracing::debug!(val, one_k, "value too small for unit table"),
        }
    }

    mantissa.push_str(&render_general(rendered));
    tracing::trace!(val, precision, one_k, %mantissa, exponent, "scaled");

    Scaled { mantissa, exponent }
}

fn scale_down(val: f64, one_k: f64, threshold: f64) -> Option<(f64, i64)> {
    let mut scaled = val;
    for step in 1..=UNITS_SIZE as i64 {
        scaled /= one_k;
        if scaled <= threshold {
            return Some((scaled, step));
        }
    }
    None
}

fn scale_up(val: f64, one_k: f64, threshold: f64) -> Option<(f64, i64)> {
    let mut scaled = val;
    for step in 1..=UNITS_SIZE as i64 {
        scaled *= one_k;
        if scaled >= threshold {
            return Some((scaled, step));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled(mantissa: &str, exponent: i64) -> Scaled {
        Scaled {
            mantissa: mantissa.to_string(),
            exponent,
        }
    }

    #[test]
    fn test_decimal_scaling() {
        let cases = [
            (0.0, scaled("0", 0)),
            (1.0, scaled("1", 0)),
            (999.0, scaled("999", 0)),
            (999.5, scaled("0.9995", 1)),
            (1_000.0, scaled("1", 1)),
            (1_500.0, scaled("1.5", 1)),
            (123_456_789.0, scaled("123.457", 2)),
            (1e24, scaled("1", 8)),
            (1e30, scaled("1e+30", 0)),
            (0.5, scaled("0.5", 0)),
            (0.01, scaled("0.01", 0)),
            (0.0015, scaled("1.5", -1)),
            (0.001, scaled("1", -1)),
            (2.5e-6, scaled("2.5", -2)),
            (1e-9, scaled("1", -3)),
            (1e-30, scaled("1e-30", 0)),
            (-2_000.0, scaled("-2", 1)),
            (-0.0015, scaled("-1.5", -1)),
        ];

        for (input, expected) in cases {
            assert_eq!(
                to_exponent_and_mantissa(input, 1, 1000.0),
                expected,
                "Failed on input {input}"
            );
        }
    }

    #[test]
    fn test_binary_scaling() {
        let cases = [
            (1_023.0, scaled("1023", 0)),
            (1_024.0, scaled("1", 1)),
            (1_536.0, scaled("1.5", 1)),
            (2.0 * 1024.0 * 1024.0, scaled("2", 2)),
            (0.001, scaled("1.024", -1)),
        ];

        for (input, expected) in cases {
            assert_eq!(
                to_exponent_and_mantissa(input, 1, 1024.0),
                expected,
                "Failed on input {input}"
            );
        }
    }

    #[test]
    fn test_precision_only_moves_thresholds() {
        // Higher precision never raises the threshold above 1.
        assert_eq!(to_exponent_and_mantissa(1_500.0, 3, 1000.0), scaled("1.5", 1));
        assert_eq!(to_exponent_and_mantissa(999.0, 6, 1000.0), scaled("999", 0));

        // Negative precision widens the readable band.
        assert_eq!(to_exponent_and_mantissa(5_000.0, -1, 1000.0), scaled("5000", 0));
        assert_eq!(to_exponent_and_mantissa(10_000.0, -1, 1000.0), scaled("10", 1));
        assert_eq!(to_exponent_and_mantissa(5.0, -1, 1000.0), scaled("5", 0));
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(to_exponent_and_mantissa(f64::NAN, 1, 1000.0), scaled("nan", 0));
        assert_eq!(to_exponent_and_mantissa(f64::INFINITY, 1, 1000.0), scaled("inf", 0));
        assert_eq!(
            to_exponent_and_mantissa(f64::NEG_INFINITY, 1, 1024.0),
            scaled("-inf", 0)
        );
    }
}
