use std::fmt;

use serde::{Serialize, Serializer};

/// Displays an `f64` the way trace entries and result text print numbers.
///
/// - `0` and `-0` both print as `0`
/// - integral values carry no fractional part (`4`, not `4.0`)
/// - magnitudes in `[1e-6, 1e21)` use plain decimal notation with the
///   shortest digits that round-trip
/// - everything else finite uses exponent notation with a signed exponent
///   (`1e+21`, `1.5e-7`)
/// - non-finite values print as `Infinity`, `-Infinity`, or `NaN`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        #[allow(clippy::float_cmp)]
        if value == 0.0 {
            return f.write_str("0");
        }

        if (1e-6..1e21).contains(&value.abs()) {
            return write!(f, "{value}");
        }

        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    }
}

/// Serializes finite values as JSON numbers and non-finite values as their
/// display text, since JSON has no literal for them.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(value: f64) -> String {
        Number(value).to_string()
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(show(4.0), "4");
        assert_eq!(show(-5.0), "-5");
        assert_eq!(show(100.0), "100");
    }

    #[test]
    fn zero_is_unsigned() {
        assert_eq!(show(0.0), "0");
        assert_eq!(show(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(show(1.5), "1.5");
        assert_eq!(show(-0.25), "-0.25");
        assert_eq!(show(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(show(0.000_001), "0.000001");
    }

    #[test]
    fn large_values_switch_to_exponent_at_1e21() {
        assert_eq!(show(1e20), "100000000000000000000");
        assert_eq!(show(1e21), "1e+21");
        assert_eq!(show(-1.5e300), "-1.5e+300");
    }

    #[test]
    fn tiny_values_use_negative_exponent() {
        assert_eq!(show(1e-7), "1e-7");
        assert_eq!(show(-2.5e-10), "-2.5e-10");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(show(f64::INFINITY), "Infinity");
        assert_eq!(show(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(show(f64::NAN), "NaN");
    }

    #[test]
    fn serializes_non_finite_values_as_text() {
        let json = serde_json::to_string(&[
            Number(-2.5),
            Number(f64::INFINITY),
            Number(f64::NEG_INFINITY),
        ])
        .expect("serializes");
        assert_eq!(json, r#"[-2.5,"Infinity","-Infinity"]"#);
    }
}
