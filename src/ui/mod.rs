//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library,
//! including:
//! - Terminal rendering and layout
//! - Widget styling helpers and the slice palette
//! - View rendering (editing list, wheel, footer, log pane)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub use render::render;
