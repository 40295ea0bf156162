use std::fmt;

use maxsub_core::Number;

/// Decisions emitted by the maximum subarray solver, in the order they occur.
///
/// The `Display` impl renders the trace entry for each decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// State seeded from the first element.
    Initialized {
        /// Best sum so far (the first element).
        max_sum: f64,

        /// Running sum of the candidate subarray (the first element).
        current_sum: f64,
    },

    /// The pass reached a new element.
    Considering {
        /// Index of the element.
        index: usize,

        /// Value of the element.
        value: f64,
    },

    /// The element was appended to the candidate subarray.
    Extended {
        /// Index of the element.
        index: usize,

        /// Running sum after extending.
        current_sum: f64,
    },

    /// A new candidate subarray was started at the element.
    ///
    /// This also happens on a tie, when extending would give the same sum as
    /// the element alone.
    Restarted {
        /// Index of the element, now the candidate's start.
        index: usize,

        /// Running sum of the new candidate (the element itself).
        current_sum: f64,
    },

    /// The candidate subarray beat the best sum so far.
    NewMaximum {
        /// The new best sum.
        max_sum: f64,

        /// Start index of the new best subarray.
        start: usize,

        /// End index (inclusive) of the new best subarray.
        end: usize,
    },

    /// The candidate did not strictly beat the best sum, which is kept.
    MaximumUnchanged {
        /// Index of the element just processed.
        index: usize,

        /// The retained best sum.
        max_sum: f64,
    },
}

impl Event {
    /// Returns the index of the element this event concerns.
    ///
    /// [`Event::Initialized`] concerns the first element, index `0`.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Initialized { .. } => 0,
            Self::Considering { index, .. }
            | Self::Extended { index, .. }
            | Self::Restarted { index, .. }
            | Self::MaximumUnchanged { index, .. } => *index,
            Self::NewMaximum { end, .. } => *end,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Initialized {
                max_sum,
                current_sum,
            } => write!(
                f,
                "Initialize: maxSum = {}, currentSum = {}",
                Number(max_sum),
                Number(current_sum)
            ),
            Self::Considering { index, value } => {
                write!(f, "Considering element at index {index}: {}", Number(value))
            }
            Self::Extended { current_sum, .. } => write!(
                f,
                "Extended current subarray. Current sum: {}",
                Number(current_sum)
            ),
            Self::Restarted { index, current_sum } => write!(
                f,
                "Started new subarray at index {index}. Current sum: {}",
                Number(current_sum)
            ),
            Self::NewMaximum {
                max_sum,
                start,
                end,
            } => write!(
                f,
                "New maximum sum found: {}, from index {start} to {end}",
                Number(max_sum)
            ),
            Self::MaximumUnchanged { max_sum, .. } => write!(
                f,
                "No new maximum. Current max sum remains: {}",
                Number(max_sum)
            ),
        }
    }
}
