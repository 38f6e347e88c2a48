/// Receives events emitted by a solver while it runs.
///
/// Observers see every event in order and cannot alter the run. Use them for
/// logging, progress reporting, or collecting diagnostics alongside the
/// solver's own output.
///
/// `()` is the no-op observer, and any `FnMut(&E)` closure is an observer.
pub trait Observer<E> {
    /// Handles a single event.
    fn observe(&mut self, event: &E);
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<Obs: Observer<usize>>(mut observer: Obs, count: usize) {
        for event in 0..count {
            observer.observe(&event);
        }
    }

    #[test]
    fn unit_observer_ignores_events() {
        emit((), 3);
    }

    #[test]
    fn closure_observer_sees_every_event_in_order() {
        let mut seen = Vec::new();
        emit(|event: &usize| seen.push(*event), 4);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn borrowed_closure_observer() {
        let mut total = 0;
        let mut sum = |event: &usize| total += *event;
        emit(&mut sum, 5);
        assert_eq!(total, 10);
    }
}
