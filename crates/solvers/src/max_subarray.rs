//! Traced maximum subarray search.
//!
//! # Algorithm
//!
//! A single left-to-right pass (Kadane's algorithm) keeps two sums: the
//! running sum of a candidate subarray ending at the current element, and the
//! best sum seen so far. At each element after the first the solver decides
//! whether to extend the candidate or restart it at the element, then checks
//! whether the candidate beats the best. The pass is O(n) time and O(1) extra
//! state.
//!
//! Ties are resolved the same way every time:
//!
//! - The candidate extends only if `current + x > x`, so a running sum of
//!   zero restarts at `x`.
//! - The best is replaced only by a strictly larger sum, so the first maximal
//!   subarray found is the one reported.
//!
//! An empty sequence yields a zero sum at indices `0..=0` with no elements and
//! no events. This is a result, not an error.
//!
//! # Observer Events
//!
//! The solver emits one [`Event::Initialized`] for the first element, then
//! three events for every later element, in this order:
//!
//! 1. [`Event::Considering`]
//! 2. [`Event::Extended`] or [`Event::Restarted`]
//! 3. [`Event::NewMaximum`] or [`Event::MaximumUnchanged`]
//!
//! A completed pass over `n > 0` elements therefore emits `1 + 3 * (n - 1)`
//! events. [`solve`] renders each event to a trace string.
//!
//! Observers can return [`Action::StopEarly`] after any event to halt the
//! pass. The solution is then the best subarray found so far, with
//! [`Status::StoppedByObserver`].

mod action;
mod event;
mod solution;
mod state;


pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use maxsub_core::{NumericSequence, Observer};

use state::State;

/// Finds the maximum subarray and records the trace of decisions.
///
/// The trace holds one entry per [`Event`], rendered with its `Display` impl,
/// in the order the decisions were made.
#[must_use]
pub fn solve(seq: &NumericSequence) -> (Solution, Vec<String>) {
    let mut trace = Vec::with_capacity(trace_len(seq.len()));
    let solution = solve_observed(seq, |event: &Event| -> Option<Action> {
        trace.push(event.to_string());
        None
    });
    (solution, trace)
}

/// Finds the maximum subarray, reporting each decision to `observer`.
///
/// See the [module docs](self) for event order and observer actions.
pub fn solve_observed<Obs>(seq: &NumericSequence, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let Some((&first, rest)) = seq.as_slice().split_first() else {
        return Solution::empty();
    };

    let mut state = State::new(first);
    if stop_requested(&mut observer, &state.initialized()) {
        return state.into_solution(seq, Status::StoppedByObserver);
    }

    for (offset, &value) in rest.iter().enumerate() {
        let index = offset + 1;

        if stop_requested(&mut observer, &Event::Considering { index, value }) {
            return state.into_solution(seq, Status::StoppedByObserver);
        }

        let run = state.absorb(index, value);
        if stop_requested(&mut observer, &run) {
            return state.into_solution(seq, Status::StoppedByObserver);
        }

        let best = state.update_best(index);
        if stop_requested(&mut observer, &best) {
            return state.into_solution(seq, Status::StoppedByObserver);
        }
    }

    state.into_solution(seq, Status::Completed)
}

/// Finds the maximum subarray without observer support.
///
/// This is a convenience wrapper around [`solve_observed`] that uses a no-op
/// observer.
#[must_use]
pub fn solve_unobserved(seq: &NumericSequence) -> Solution {
    solve_observed(seq, ())
}

/// Returns how many events a completed pass over `len` elements emits.
#[must_use]
pub fn trace_len(len: usize) -> usize {
    match len {
        0 => 0,
        n => 1 + 3 * (n - 1),
    }
}

fn stop_requested<Obs>(observer: &mut Obs, event: &Event) -> bool
where
    Obs: Observer<Event, Action>,
{
    match observer.observe(event) {
        Some(Action::StopEarly) => true,
        None => false,
    }
}
