//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - The entry list shared by the editing and wheel views
//! - The spin controller state machine
//! - Navigation types (View, Focus)
//! - State error handling

mod entries;
mod error;
mod navigation;
mod spin;

pub use entries::{Entry, EntryList};
pub use error::StateError;
pub use navigation::{Focus, View};
pub use spin::{SpinPhase, SpinState};

mod state_impl;

pub use state_impl::State;
