use maxsub_core::NumericSequence;

use super::{Event, Solution, Status};

/// Running state of one pass.
pub(super) struct State {
    max_sum: f64,
    current_sum: f64,
    best_start: usize,
    best_end: usize,
    candidate_start: usize,
}

impl State {
    /// Seeds the state from the first element.
    pub(super) fn new(first: f64) -> Self {
        Self {
            max_sum: first,
            current_sum: first,
            best_start: 0,
            best_end: 0,
            candidate_start: 0,
        }
    }

    pub(super) fn initialized(&self) -> Event {
        Event::Initialized {
            max_sum: self.max_sum,
            current_sum: self.current_sum,
        }
    }

    /// Extends the candidate with `value`, or restarts it at `index`.
    ///
    /// Extends only if that strictly beats `value` alone, so a running sum of
    /// zero restarts.
    pub(super) fn absorb(&mut self, index: usize, value: f64) -> Event {
        if self.current_sum + value > value {
            self.current_sum += value;
            Event::Extended {
                index,
                current_sum: self.current_sum,
            }
        } else {
            self.current_sum = value;
            self.candidate_start = index;
            Event::Restarted {
                index,
                current_sum: self.current_sum,
            }
        }
    }

    /// Records the candidate ending at `index` as best if it strictly wins.
    pub(super) fn update_best(&mut self, index: usize) -> Event {
        if self.current_sum > self.max_sum {
            self.max_sum = self.current_sum;
            self.best_start = self.candidate_start;
            self.best_end = index;
            Event::NewMaximum {
                max_sum: self.max_sum,
                start: self.best_start,
                end: self.best_end,
            }
        } else {
            Event::MaximumUnchanged {
                index,
                max_sum: self.max_sum,
            }
        }
    }

    pub(super) fn into_solution(self, seq: &NumericSequence, status: Status) -> Solution {
        let elements = seq.as_slice()[self.best_start..=self.best_end].to_vec();
        Solution {
            status,
            sum: self.max_sum,
            start: self.best_start,
            end: self.best_end,
            elements: NumericSequence::new(elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_running_sum_restarts() {
        let mut state = State::new(0.0);

        let event = state.absorb(1, 5.0);

        assert_eq!(
            event,
            Event::Restarted {
                index: 1,
                current_sum: 5.0
            }
        );
        assert_eq!(state.candidate_start, 1);
    }

    #[test]
    fn positive_running_sum_extends() {
        let mut state = State::new(2.0);

        let event = state.absorb(1, -1.0);

        assert_eq!(
            event,
            Event::Extended {
                index: 1,
                current_sum: 1.0
            }
        );
        assert_eq!(state.candidate_start, 0);
    }

    #[test]
    fn equal_sum_keeps_first_best() {
        let mut state = State::new(3.0);
        state.absorb(1, -3.0);
        state.absorb(2, 3.0);

        let event = state.update_best(2);

        assert_eq!(
            event,
            Event::MaximumUnchanged {
                index: 2,
                max_sum: 3.0
            }
        );
        assert_eq!((state.best_start, state.best_end), (0, 0));
    }

    #[test]
    fn larger_sum_moves_best_to_candidate() {
        let mut state = State::new(-1.0);
        state.absorb(1, 4.0);

        let event = state.update_best(1);

        assert_eq!(
            event,
            Event::NewMaximum {
                max_sum: 4.0,
                start: 1,
                end: 1
            }
        );
    }
}
