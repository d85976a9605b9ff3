use ratatui::style::{Color, Modifier, Style};

/// Fixed palette cycled over the wheel slices by index modulo its length.
///
pub const SLICE_COLORS: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Return the palette color for the slice at the given index.
///
pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the style for active list items.
///
pub fn active_list_item_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Return the style for normal text.
///
pub fn normal_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Return the style for dimmed hint text.
///
pub fn hint_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the style for an enabled action control.
///
pub fn enabled_control_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Return the style for a disabled action control.
///
pub fn disabled_control_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_color_cycles_by_modulo() {
        assert_eq!(slice_color(0), Color::Red);
        assert_eq!(slice_color(5), Color::Cyan);
        assert_eq!(slice_color(6), Color::Red);
        assert_eq!(slice_color(13), Color::Green);
    }
}
