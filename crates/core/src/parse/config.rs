/// Limits applied while validating input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Longest sequence accepted, or `None` for no limit.
    ///
    /// Every element after the first adds three trace entries, so this also
    /// bounds trace memory.
    pub max_len: Option<usize>,
}

impl Config {
    /// Creates a config that rejects sequences longer than `max_len`.
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    /// Checks a parsed length against the limit.
    pub(super) fn check_len(&self, len: usize) -> Result<(), (usize, usize)> {
        match self.max_len {
            Some(max_len) if len > max_len => Err((len, max_len)),
            _ => Ok(()),
        }
    }
}
