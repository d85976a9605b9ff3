use crate::state::{Focus, State, StateError, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    sync::{mpsc, Arc, Mutex},
    thread,
    time::Duration,
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    // Some terminals also report key releases.
                    if key.kind == KeyEventKind::Press {
                        tx_clone.send(Event::Input(key)).unwrap();
                    }
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive the next terminal event and apply it to the shared state.
    /// The state lock is taken only after an event arrives so the spin
    /// worker can animate between keystrokes. Returns result with value
    /// true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &Arc<Mutex<State>>) -> Result<bool> {
        let event = self.rx.recv()?;
        let mut state = state.lock().map_err(|_| StateError::LockPoisoned)?;
        match event {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::CONTROL => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('l'),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::CONTROL => {
                    debug!("Processing toggle log pane event '{:?}'...", event);
                    state.toggle_log();
                }
                // Name input mode: all printable keys go to the input buffer
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers,
                    ..
                } if state.is_name_input_mode()
                    && (modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT) =>
                {
                    state.add_input_char(c);
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } if state.is_name_input_mode() => {
                    state.remove_input_char();
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } if state.is_name_input_mode() => {
                    debug!("Processing add entries event '{:?}'...", event);
                    state.submit_name_input();
                }
                KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Tab, ..
                } => {
                    if matches!(state.current_view(), View::Editing) {
                        debug!("Processing toggle focus event '{:?}'...", event);
                        state.toggle_focus();
                    }
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } => match state.current_view() {
                    View::Wheel => {
                        debug!("Processing back to editing event '{:?}'...", event);
                        state.toggle_view();
                    }
                    View::Editing => {
                        state.focus_input();
                    }
                },
                KeyEvent {
                    code: KeyCode::Char('g'),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE => {
                    debug!("Processing toggle view event '{:?}'...", event);
                    state.toggle_view();
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => match state.current_view() {
                    View::Editing => {
                        debug!("Processing toggle view event '{:?}'...", event);
                        state.toggle_view();
                    }
                    View::Wheel => {
                        debug!("Processing spin trigger event '{:?}'...", event);
                        state.trigger_spin();
                    }
                },
                KeyEvent {
                    code: KeyCode::Char('s' | ' '),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE => {
                    if matches!(state.current_view(), View::Wheel) {
                        debug!("Processing spin trigger event '{:?}'...", event);
                        state.trigger_spin();
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('j') | KeyCode::Down,
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE => match state.current_view() {
                    View::Editing => state.next_entry(),
                    View::Wheel => state.next_slice(),
                },
                KeyEvent {
                    code: KeyCode::Char('k') | KeyCode::Up,
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE => match state.current_view() {
                    View::Editing => state.previous_entry(),
                    View::Wheel => state.previous_slice(),
                },
                KeyEvent {
                    code: KeyCode::Char('d' | '-'),
                    modifiers,
                    ..
                } if modifiers == KeyModifiers::NONE => match state.current_view() {
                    View::Editing => {
                        if matches!(state.current_focus(), Focus::Entries) {
                            debug!("Processing remove entry event '{:?}'...", event);
                            state.remove_selected_entry();
                        }
                    }
                    View::Wheel => {
                        debug!("Processing remove slice event '{:?}'...", event);
                        state.remove_selected_slice();
                    }
                },
                _ => {
                    debug!("Skipping processing of terminal event '{:?}'...", event);
                }
            },
            Event::Tick => {
                // Redraw cadence while the spin worker animates.
            }
        }
        Ok(true)
    }
}
