/// Actions an observer can take during a maximum subarray pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current event and return the best subarray found so far.
    StopEarly,
}
