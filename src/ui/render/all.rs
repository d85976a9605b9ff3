use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the full application frame according to state: the current view on
/// top, the optional log pane, and the hotkey footer at the bottom.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let mut constraints = vec![Constraint::Min(10), Constraint::Length(1)];
    if state.is_log_visible() {
        constraints.insert(1, Constraint::Length(10));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    match state.current_view() {
        View::Editing => editing::editing(frame, rows[0], state),
        View::Wheel => wheel::wheel(frame, rows[0], state),
    }

    if state.is_log_visible() {
        log(frame, rows[1]);
    }

    footer(frame, rows[rows.len() - 1], state);
}
