use maxsub_core::NumericSequence;

/// Indicates whether the pass covered the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Status {
    /// Every element was processed.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a maximum subarray search.
///
/// `elements` is a copy of the input over `start..=end`, and `sum` is the
/// sum of `elements`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Sum of the best subarray.
    ///
    /// Serialized as a JSON number, or as `"Infinity"` / `"-Infinity"` when
    /// the sum overflows.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_sum"))]
    pub sum: f64,

    /// Start index of the best subarray.
    pub start: usize,

    /// End index (inclusive) of the best subarray.
    pub end: usize,

    /// The best subarray's elements.
    pub elements: NumericSequence,
}

impl Solution {
    /// The result for an empty input: zero sum, zero bounds, no elements.
    pub(super) fn empty() -> Self {
        Self {
            status: Status::Completed,
            sum: 0.0,
            start: 0,
            end: 0,
            elements: NumericSequence::default(),
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_sum<S: serde::Serializer>(sum: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&maxsub_core::Number(*sum), serializer)
}
