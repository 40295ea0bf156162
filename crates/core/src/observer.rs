/// Watches a solver pass one event at a time and may steer it.
///
/// The solver never writes its trace directly. It hands each decision to an
/// observer, which can record it, log it, or ask the solver to act (for
/// example to stop early) by returning `Some(action)`. Returning `None` lets
/// the pass continue untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that ignores everything. Pass `&mut closure` to keep using a
/// closure's captured state after the solve returns.
pub trait Observer<E, A> {
    /// Receives one event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[u32]) -> Vec<&'static str>
    where
        O: Observer<u32, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |e: &u32| {
                seen.push(*e);
                (*e == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(actions, vec!["stop"]);
    }

    #[test]
    fn borrowed_closure_keeps_state() {
        let mut count = 0usize;
        let mut counter = |_e: &u32| -> Option<&'static str> {
            count += 1;
            None
        };

        drive(&mut counter, &[5, 6]);
        drive(&mut counter, &[7]);

        assert_eq!(count, 3);
    }
}
