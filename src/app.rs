use crate::config::Config;
use crate::error::AppError;
use crate::events::spin::{Event as SpinEvent, Handler as SpinEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::{State, StateError};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use tui_logger::{init_logger, set_default_level};

pub type SpinEventSender = std::sync::mpsc::Sender<SpinEvent>;
type SpinEventReceiver = std::sync::mpsc::Receiver<SpinEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Trace).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<SpinEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, &config))),
            config,
        };
        app.start_spin_worker(rx);
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for the timed wheel animation.
    ///
    fn start_spin_worker(&self, receiver: SpinEventReceiver) {
        debug!("Creating new thread for the spin animation...");
        let cloned_state = Arc::clone(&self.state);
        let step_delay = self.config.step_delay();
        std::thread::spawn(move || {
            let mut spin_event_handler = SpinEventHandler::new(&cloned_state, step_delay);
            while let Ok(spin_event) = receiver.recv() {
                match spin_event_handler.handle(spin_event) {
                    Ok(_) => (),
                    Err(e) => error!("Failed to handle spin event: {}", e),
                }
            }
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let mut state = self.state.lock().map_err(|_| StateError::LockPoisoned)?;
                terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            }
            if !terminal_event_handler.handle_next(&self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
