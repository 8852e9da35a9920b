/// Receives solver events and decides how the integration should proceed.
///
/// Observers are how a caller sees a trajectory while it is produced: writing
/// rows, collecting diagnostics, or stopping a run early.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Halt;

    fn drive<O: Observer<f64, Halt>>(mut observer: O, times: &[f64]) -> Option<usize> {
        times
            .iter()
            .position(|t| observer.observe(t).is_some())
    }

    #[test]
    fn closure_observer_can_request_an_action() {
        let stop_after_two = |t: &f64| (*t >= 2.0).then_some(Halt);

        assert_eq!(drive(stop_after_two, &[0.0, 1.0, 2.0, 3.0]), Some(2));
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[0.0, 1.0, 2.0]), None);
    }
}
