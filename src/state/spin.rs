//! Spin controller state machine.
//!
//! A run goes from angle zero up to a randomly chosen target: the controller
//! is `Spinning` for the whole run and `Idle` before and after. The angle is
//! left at its final value when the run ends so the wheel rests where it
//! stopped.

/// Specifying the two states of the spin controller.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Tracks one timed animation run from angle zero to the target.
///
#[derive(Debug)]
pub struct SpinState {
    phase: SpinPhase,
    angle: f32,
    target: f32,
}

impl Default for SpinState {
    fn default() -> SpinState {
        SpinState {
            phase: SpinPhase::Idle,
            angle: 0.0,
            target: 0.0,
        }
    }
}

impl SpinState {
    /// Return the current phase.
    ///
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Return whether a run is currently in progress.
    ///
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Return the current rotation angle in degrees.
    ///
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Return the target magnitude of the current or most recent run.
    ///
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin a new run towards the given target. Only permitted while idle:
    /// returns false and leaves the angle and target untouched when a run is
    /// already in progress.
    ///
    pub fn start(&mut self, target: f32) -> bool {
        if self.phase == SpinPhase::Spinning {
            return false;
        }
        self.phase = SpinPhase::Spinning;
        self.angle = 0.0;
        self.target = target;
        true
    }

    /// Apply one animation step, incrementing the angle by one degree. The
    /// run completes the first time the angle exceeds the target. Returns
    /// true once the run is over (or when no run is in progress).
    ///
    pub fn advance(&mut self) -> bool {
        if self.phase != SpinPhase::Spinning {
            return true;
        }
        self.angle += 1.0;
        if self.angle > self.target {
            self.phase = SpinPhase::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_angle_zero() {
        let spin = SpinState::default();
        assert_eq!(spin.phase(), SpinPhase::Idle);
        assert_eq!(spin.angle(), 0.0);
    }

    #[test]
    fn run_increments_by_one_until_past_target() {
        let mut spin = SpinState::default();
        assert!(spin.start(3.5));
        assert!(spin.is_spinning());

        assert!(!spin.advance());
        assert_eq!(spin.angle(), 1.0);
        assert!(spin.is_spinning());
        assert!(!spin.advance());
        assert_eq!(spin.angle(), 2.0);
        assert!(!spin.advance());
        assert_eq!(spin.angle(), 3.0);

        // First step past the target ends the run.
        assert!(spin.advance());
        assert_eq!(spin.angle(), 4.0);
        assert_eq!(spin.phase(), SpinPhase::Idle);
    }

    #[test]
    fn run_with_zero_target_ends_on_first_step() {
        let mut spin = SpinState::default();
        spin.start(0.0);
        assert!(spin.advance());
        assert_eq!(spin.angle(), 1.0);
        assert!(!spin.is_spinning());
    }

    #[test]
    fn start_resets_angle_between_runs() {
        let mut spin = SpinState::default();
        spin.start(1.5);
        while !spin.advance() {}
        assert!(spin.angle() > 0.0);
        assert!(spin.start(2.5));
        assert_eq!(spin.angle(), 0.0);
        assert_eq!(spin.target(), 2.5);
    }

    #[test]
    fn restart_while_spinning_is_noop() {
        let mut spin = SpinState::default();
        spin.start(10.0);
        spin.advance();
        let angle = spin.angle();
        assert!(!spin.start(99.0));
        assert_eq!(spin.angle(), angle);
        assert_eq!(spin.target(), 10.0);
        assert!(spin.is_spinning());
    }

    #[test]
    fn advance_while_idle_reports_done_without_moving() {
        let mut spin = SpinState::default();
        assert!(spin.advance());
        assert_eq!(spin.angle(), 0.0);
        assert_eq!(spin.phase(), SpinPhase::Idle);
    }

    #[test]
    fn angle_is_kept_after_run_ends() {
        let mut spin = SpinState::default();
        spin.start(5.2);
        while !spin.advance() {}
        assert_eq!(spin.angle(), 6.0);
        assert_eq!(spin.phase(), SpinPhase::Idle);
    }
}
