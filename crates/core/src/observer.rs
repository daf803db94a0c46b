/// Watches a solver as it iterates and optionally steers it.
///
/// A solver hands each event to its observer and continues unchanged when
/// `observe` returns `None`. Returning `Some(action)` requests one of the
/// solver's own actions, such as stopping early. This is how progress display,
/// cooperative cancellation, and diagnostic logging attach to a solver without
/// the solver knowing about any of them.
///
/// Closures of type `FnMut(&E) -> Option<A>` are observers, `()` is the no-op
/// observer, and a pair `(A, B)` runs both observers on every event.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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

/// Both observers see every event; the first one's action wins.
impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
        Slow,
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<Action> = observer.observe(&1.0_f64);
        assert_eq!(action, None);
    }

    #[test]
    fn closure_observer_sees_events() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            if *event >= 2 { Some(Action::Stop) } else { None }
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Action::Stop));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn pair_runs_both_and_prefers_first() {
        let mut first_calls = 0;
        let mut second_calls = 0;

        {
            let first = |_: &u8| {
                first_calls += 1;
                Some(Action::Stop)
            };
            let second = |_: &u8| {
                second_calls += 1;
                Some(Action::Slow)
            };
            let mut pair = (first, second);
            let action = Observer::<u8, Action>::observe(&mut pair, &0);
            assert_eq!(action, Some(Action::Stop));
        }

        assert_eq!(first_calls, 1);
        assert_eq!(second_calls, 1);
    }

    #[test]
    fn pair_falls_back_to_second() {
        let mut pair = ((), |_: &u8| Some(Action::Slow));
        let action = Observer::<u8, Action>::observe(&mut pair, &0);
        assert_eq!(action, Some(Action::Slow));
    }
}
