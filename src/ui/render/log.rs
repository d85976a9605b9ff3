use super::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

/// Render the log pane fed by the `tui_logger` backend.
///
pub fn log(frame: &mut Frame, size: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log (Ctrl-L to hide)")
                .borders(Borders::ALL),
        )
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S%.3f".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Green))
        .style_debug(Style::default().fg(Color::Gray))
        .style_trace(Style::default().fg(Color::DarkGray));
    frame.render_widget(widget, size);
}
