use super::Frame;
use crate::state::{Focus, State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render the hotkey footer for the current view and focus.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let text = match state.current_view() {
        View::Editing => match state.current_focus() {
            Focus::Input => {
                " Type names | Enter: add | Tab: entry list | Ctrl-L: log | Ctrl-C: quit"
            }
            Focus::Entries => {
                " j/k: select | d: remove | Enter/g: wheel | Tab: input | q: quit"
            }
        },
        View::Wheel => {
            if state.is_spinning() {
                " spinning... | j/k: select slice | d: remove slice | q: quit"
            } else {
                " s/Space: spin | j/k: select slice | d: remove slice | g/Esc: back | q: quit"
            }
        }
    };
    frame.render_widget(Paragraph::new(text).style(styling::hint_text_style()), size);
}
