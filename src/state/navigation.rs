//! Navigation-related state types.
//!
//! This module contains the view switch between the editing screen and the
//! wheel screen, and the sub-focus within the editing screen.

/// Specifying the two screens of the application.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Editing,
    Wheel,
}

impl View {
    /// Return the other view.
    ///
    pub fn toggled(self) -> View {
        match self {
            View::Editing => View::Wheel,
            View::Wheel => View::Editing,
        }
    }
}

/// Specifying the different foci within the editing view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Input,
    Entries,
}
