//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Spin events: the timed wheel animation
//! - Terminal events: user input and terminal interactions

pub mod spin;
pub mod terminal;
