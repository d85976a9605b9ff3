use crate::state::{State, StateError};
use anyhow::Result;
use log::*;
use std::sync::{Arc, Mutex};
use std::{thread, time::Duration};

/// Specify different spin event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Spin,
}

/// Specify struct for animating state with spin events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    step_delay: Duration,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state and the configured
    /// per-step delay.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, step_delay: Duration) -> Self {
        Handler { state, step_delay }
    }

    /// Handle spin events by type.
    ///
    pub fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing spin event '{:?}'...", event);
        match event {
            Event::Spin => self.animate()?,
        }
        Ok(())
    }

    /// Drive the current run to completion, sleeping for the configured
    /// delay between steps. The run itself was started by the trigger site
    /// under the state lock, so a single event maps to at most one run. The
    /// lock is held only while applying a step, leaving the render loop free
    /// to draw between steps.
    ///
    fn animate(&mut self) -> Result<()> {
        loop {
            thread::sleep(self.step_delay);
            let mut state = self.state.lock().map_err(|_| StateError::LockPoisoned)?;
            let done = state.advance_spin();
            trace!(
                "current: {}, until: {}",
                state.spin_angle(),
                state.spin_target()
            );
            if done {
                break;
            }
        }
        let state = self.state.lock().map_err(|_| StateError::LockPoisoned)?;
        info!("Spin finished at angle {:.1}.", state.spin_angle());
        Ok(())
    }
}
