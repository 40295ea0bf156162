use thiserror::Error;

/// Input text was not an acceptable array of numbers.
///
/// The message is the same for every failure so it can be shown to an end
/// user as is. The specific cause is available through [`reason`] or the
/// error's `source()`.
///
/// [`reason`]: ValidationError::reason
#[derive(Debug, Error)]
#[error("Invalid input. Please enter an array of numbers.")]
pub struct ValidationError {
    #[source]
    reason: ValidationReason,
}

impl ValidationError {
    pub(super) fn new(reason: ValidationReason) -> Self {
        Self { reason }
    }

    /// Returns why validation failed.
    #[must_use]
    pub fn reason(&self) -> &ValidationReason {
        &self.reason
    }
}

/// The specific cause of a [`ValidationError`].
#[derive(Debug, Error)]
pub enum ValidationReason {
    /// The text is not well-formed (includes empty input and trailing
    /// content).
    #[error("malformed array syntax")]
    Syntax(#[source] serde_json::Error),

    /// The text is well-formed but is not an array.
    #[error("expected an array of numbers")]
    Type(#[source] serde_json::Error),

    /// The array holds an element that is not a number.
    #[error("element {index} is not a number")]
    NotANumber { index: usize },

    /// The array holds more elements than the configured limit.
    #[error("array has {len} elements, limit is {max_len}")]
    TooLong { len: usize, max_len: usize },
}

impl From<serde_json::Error> for ValidationReason {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Type(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(err),
        }
    }
}
