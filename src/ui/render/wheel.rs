use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
};

/// Radius of the wheel in canvas units.
///
const WHEEL_RADIUS: f64 = 1.0;

/// Radial position of the slice labels.
///
const LABEL_RADIUS: f64 = 0.6;

/// Render the wheel view: the spin control on top, the pointer, and the
/// wheel itself rotated by the current spin angle.
///
pub fn wheel(frame: &mut Frame, size: Rect, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(size);

    render_spin_control(frame, rows[0], state);
    render_pointer(frame, rows[1]);
    render_wheel_canvas(frame, rows[2], state);
}

/// Render the spin control, disabled while a run is in progress.
///
fn render_spin_control(frame: &mut Frame, size: Rect, state: &State) {
    let (text, style) = if state.is_spinning() {
        ("spinning...", styling::disabled_control_style())
    } else {
        ("[ SPIN! ]", styling::enabled_control_style())
    };
    let control = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Wheel"));
    frame.render_widget(control, size);
}

/// Render the arrow pointing down at the wheel.
///
fn render_pointer(frame: &mut Frame, size: Rect) {
    let pointer = Paragraph::new("▼")
        .alignment(Alignment::Center)
        .style(styling::normal_text_style());
    frame.render_widget(pointer, size);
}

/// Render the wheel as a circle divided into equal angular slices, each
/// boundary and label colored by cycling the slice palette. The whole wheel
/// is rotated clockwise by the current spin angle.
///
fn render_wheel_canvas(frame: &mut Frame, size: Rect, state: &State) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.4, 1.4])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: WHEEL_RADIUS,
                color: Color::White,
            });

            let entries = state.entries();
            if entries.is_empty() {
                ctx.print(
                    0.0,
                    0.0,
                    Line::styled("The wheel is empty", styling::hint_text_style()),
                );
                return;
            }

            let per_slice = 360.0 / entries.len() as f64;
            let rotation = state.spin_angle() as f64;
            for (index, entry) in entries.iter().enumerate() {
                // Slice centers start at the top and march clockwise.
                let center = 90.0 - per_slice * index as f64 - rotation;
                let boundary = (center + per_slice / 2.0).to_radians();
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: WHEEL_RADIUS * boundary.cos(),
                    y2: WHEEL_RADIUS * boundary.sin(),
                    color: styling::slice_color(index),
                });

                let label_angle = center.to_radians();
                let mut style = Style::default().fg(styling::slice_color(index));
                if index == state.selected_slice_index() {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                ctx.print(
                    label_angle.cos() * LABEL_RADIUS,
                    label_angle.sin() * LABEL_RADIUS,
                    Line::styled(entry.name.clone(), style),
                );
            }
        });
    frame.render_widget(canvas, size);
}
