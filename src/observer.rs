//! Step observer trait for monitoring solver progress.

/// Trait for observing solver updates.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// on-screen statistics, or performance profiling). All methods have default
/// no-op implementations. Hooks fire in pass order within each sub-step.
pub trait StepObserver<F> {
    /// Called after the collision pass of sub-step `substep`.
    fn on_collisions(&mut self, _substep: u32, _contacts: usize) {}

    /// Called after the boundary pass; `clamped` bodies were pulled back in.
    fn on_constrain(&mut self, _substep: u32, _clamped: usize) {}

    /// Called after all bodies have been integrated (Verlet step).
    fn on_integrate(&mut self, _substep: u32) {}

    /// Called when a frame is fully complete, with the new simulated time.
    fn on_step_complete(&mut self, _time: F) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F> StepObserver<F> for NoOpStepObserver {}

/// Running totals across every observed update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub frames: u64,
    pub substeps: u64,
    pub contacts: u64,
    pub clamped: u64,
    /// Contacts resolved during the most recent frame.
    pub last_frame_contacts: usize,
}

impl<F> StepObserver<F> for StepStats {
    fn on_collisions(&mut self, substep: u32, contacts: usize) {
        if substep == 0 {
            self.last_frame_contacts = 0;
        }
        self.contacts += contacts as u64;
        self.last_frame_contacts += contacts;
    }

    fn on_constrain(&mut self, _substep: u32, clamped: usize) {
        self.clamped += clamped as u64;
    }

    fn on_integrate(&mut self, _substep: u32) {
        self.substeps += 1;
    }

    fn on_step_complete(&mut self, _time: F) {
        self.frames += 1;
    }
}
