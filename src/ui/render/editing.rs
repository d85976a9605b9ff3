use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the editing view: the name input on top and the entries list
/// below it.
///
pub fn editing(frame: &mut Frame, size: Rect, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(size);

    render_name_input(frame, rows[0], state);
    render_entries(frame, rows[1], state);
}

/// Render the name input box, highlighted while it has focus.
///
fn render_name_input(frame: &mut Frame, size: Rect, state: &State) {
    let active = matches!(state.current_focus(), Focus::Input);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Name (comma-separated, Enter to add)")
        .border_style(if active {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });

    let input = Paragraph::new(state.name_input())
        .style(styling::normal_text_style())
        .block(block);
    frame.render_widget(input, size);
}

/// Render the entries list with each row carrying the color of its wheel
/// slice.
///
fn render_entries(frame: &mut Frame, size: Rect, state: &State) {
    let active = matches!(state.current_focus(), Focus::Entries);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Entries ({})", state.entries().len()))
        .border_style(if active {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });

    if state.entries().is_empty() {
        let hint = Paragraph::new("Add some names to get started.")
            .style(styling::hint_text_style())
            .block(block);
        frame.render_widget(hint, size);
        return;
    }

    let items: Vec<ListItem> = state
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(styling::slice_color(index))),
                Span::styled(entry.name.clone(), styling::normal_text_style()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if active {
        list_state.select(Some(state.selected_entry_index()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
