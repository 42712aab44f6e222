//! Reconciling optimistic edits with the server.
//!
//! Views apply a mutation locally, then persist it with one or more requests
//! sent in order. When a request fails, what the view should show depends on
//! how far the server got: nothing committed means the local snapshot is still
//! the server's state; anything committed means only a reload is trustworthy.
//!
//! A [`MutationGate`] lets one mutation run at a time, so the snapshot a
//! failed mutation restores never hides a later one.

/// What to do with local state once a remote mutation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Every step committed; the optimistic state is the server's state.
    Keep,
    /// Nothing committed; put the pre-mutation snapshot back.
    Restore,
    /// Some steps committed; fetch the list again.
    Reload,
}

/// A failed step, with the number of steps that committed before it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepError<E> {
    pub committed: usize,
    pub error: E,
}

impl<E> StepError<E> {
    pub fn is_partial(&self) -> bool {
        self.committed > 0
    }
}

pub fn reconcile<T, E>(result: &Result<T, StepError<E>>) -> Reconcile {
    match result {
        Ok(_) => Reconcile::Keep,
        Err(failure) if failure.is_partial() => Reconcile::Reload,
        Err(_) => Reconcile::Restore,
    }
}

/// Counts committed steps of a sequential mutation.
///
/// ```
/// use common::mutation::{Steps, StepError};
///
/// let mut steps = Steps::new();
/// assert!(steps.commit(Ok::<_, &str>(())).is_ok());
/// let failure: StepError<&str> = steps.commit::<(), _>(Err("boom")).unwrap_err();
/// assert_eq!(failure.committed, 1);
/// ```
#[derive(Debug, Default)]
pub struct Steps {
    committed: usize,
}

impl Steps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> usize {
        self.committed
    }

    pub fn commit<T, E>(&mut self, result: Result<T, E>) -> Result<T, StepError<E>> {
        match result {
            Ok(value) => {
                self.committed += 1;
                Ok(value)
            }
            Err(error) => Err(StepError {
                committed: self.committed,
                error,
            }),
        }
    }
}

/// Identifies the mutation holding a [`MutationGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationId(u64);

#[derive(Debug, Default)]
pub struct MutationGate {
    issued: u64,
    active: Option<MutationId>,
}

impl MutationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate; `None` while another mutation is in flight.
    pub fn begin(&mut self) -> Option<MutationId> {
        if self.active.is_some() {
            return None;
        }
        self.issued += 1;
        let id = MutationId(self.issued);
        self.active = Some(id);
        Some(id)
    }

    /// Releases the gate if `id` still holds it.
    pub fn finish(&mut self, id: MutationId) -> bool {
        if self.active == Some(id) {
            self.active = None;
            return true;
        }
        false
    }

    /// Releases the gate without waiting; later `finish` calls for the
    /// abandoned mutation are ignored.
    pub fn abandon(&mut self) {
        self.active = None;
    }

    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(outcomes: &[Result<(), &'static str>]) -> Result<(), StepError<&'static str>> {
        let mut steps = Steps::new();
        for outcome in outcomes {
            steps.commit(*outcome)?;
        }
        Ok(())
    }

    #[test]
    fn all_steps_committed_keeps_local_state() {
        assert_eq!(reconcile(&run(&[Ok(()), Ok(())])), Reconcile::Keep);
        assert_eq!(reconcile(&run(&[])), Reconcile::Keep);
    }

    #[test]
    fn first_step_failing_restores_snapshot() {
        let result = run(&[Err("500"), Ok(())]);
        assert_eq!(result, Err(StepError { committed: 0, error: "500" }));
        assert_eq!(reconcile(&result), Reconcile::Restore);
    }

    #[test]
    fn later_step_failing_reloads() {
        // swap: first rank PATCH lands, second is refused
        let result = run(&[Ok(()), Err("500")]);
        assert_eq!(result, Err(StepError { committed: 1, error: "500" }));
        assert_eq!(reconcile(&result), Reconcile::Reload);

        // delete + shifts: delete and one shift land, the next shift fails
        let result = run(&[Ok(()), Ok(()), Err("503"), Ok(())]);
        assert_eq!(result.as_ref().unwrap_err().committed, 2);
        assert_eq!(reconcile(&result), Reconcile::Reload);
    }

    #[test]
    fn gate_admits_one_mutation_at_a_time() {
        let mut gate = MutationGate::new();
        let first = gate.begin().unwrap();
        assert!(gate.is_busy());
        assert_eq!(gate.begin(), None);

        assert!(gate.finish(first));
        let second = gate.begin().unwrap();
        assert_ne!(first, second);
        assert!(!gate.finish(first));
        assert!(gate.is_busy());
    }

    #[test]
    fn abandoned_mutation_cannot_release_a_newer_one() {
        let mut gate = MutationGate::new();
        let stale = gate.begin().unwrap();
        gate.abandon();
        assert!(!gate.is_busy());

        let fresh = gate.begin().unwrap();
        assert!(!gate.finish(stale));
        assert!(gate.is_busy());
        assert!(gate.finish(fresh));
    }
}
