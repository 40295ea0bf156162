use std::{fmt, ops::RangeInclusive};

use serde::{Serialize, Serializer};

use crate::Number;

/// An ordered, immutable sequence of real numbers.
///
/// Produced by [`parse`](crate::parse) from text, or built directly from a
/// `Vec<f64>`. There is no mutable access once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSequence(Vec<f64>);

impl NumericSequence {
    /// Creates a sequence that owns `values`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the arithmetic sum of the values, accumulated left to right.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Copies the inclusive index range `range` into a new sequence.
    ///
    /// Returns `None` if the range is out of bounds.
    #[must_use]
    pub fn slice(&self, range: RangeInclusive<usize>) -> Option<Self> {
        self.0.get(range).map(|values| Self(values.to_vec()))
    }
}

impl From<Vec<f64>> for NumericSequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for NumericSequence {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for NumericSequence {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serializes as a JSON array, with each value serialized as a [`Number`].
impl Serialize for NumericSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().copied().map(Number))
    }
}

/// Displays as `[a, b, c]`, with each value rendered by [`Number`].
impl fmt::Display for NumericSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Number(*value))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn slice_is_inclusive() {
        let seq = NumericSequence::from([-2.0, 1.0, -3.0, 4.0, -1.0]);

        let middle = seq.slice(1..=3).expect("in bounds");
        assert_eq!(middle.as_slice(), &[1.0, -3.0, 4.0]);

        let single = seq.slice(4..=4).expect("in bounds");
        assert_eq!(single.as_slice(), &[-1.0]);
    }

    #[test]
    fn slice_out_of_bounds_is_none() {
        let seq = NumericSequence::from([1.0, 2.0]);
        assert!(seq.slice(1..=2).is_none());
        assert!(NumericSequence::default().slice(0..=0).is_none());
    }

    #[test]
    fn sum_accumulates_in_order() {
        let seq = NumericSequence::from([0.1, 0.2, 0.3]);
        assert_relative_eq!(seq.sum(), 0.6, epsilon = 1e-12);
        assert_relative_eq!(NumericSequence::default().sum(), 0.0);
    }

    #[test]
    fn displays_as_bracketed_list() {
        let seq = NumericSequence::from([4.0, -1.0, 2.5, 1e21]);
        assert_eq!(seq.to_string(), "[4, -1, 2.5, 1e+21]");
        assert_eq!(NumericSequence::default().to_string(), "[]");
    }

    #[test]
    fn serializes_as_plain_array() {
        let seq = NumericSequence::from([1.0, -2.5]);
        let json = serde_json::to_string(&seq).expect("serializes");
        assert_eq!(json, "[1.0,-2.5]");
    }

    #[test]
    fn serializes_infinite_values_as_text() {
        let seq = NumericSequence::from([f64::INFINITY, 3.0]);
        let json = serde_json::to_string(&seq).expect("serializes");
        assert_eq!(json, r#"["Infinity",3.0]"#);
    }
}
