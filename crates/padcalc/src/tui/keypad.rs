//! Keypad widget for the terminal front-end
//!
//! Draws the shared [`Keypad`] layout inside a bordered block. Spanning buttons
//! (`AC`, `0`, `=`) take the combined area of the cells they cover.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::KeypadAction;
use crate::keypad::{Keypad, KeypadButton};

/// Size of one grid cell inside the bordered area, or None if too small
fn cell_size(keypad: &Keypad, area: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let width = area.width.saturating_sub(2) / cols as u16;
    let height = area.height.saturating_sub(2) / rows as u16;
    (width > 0 && height > 0).then_some((width, height))
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (cell_width, cell_height) = cell_size(keypad, area)?;
    let col = ((rel_x - 1) / cell_width) as usize;
    let row = ((rel_y - 1) / cell_height) as usize;

    keypad.index_at(row, col)
}

/// Screen rectangle of a button inside the inner keypad area
fn button_rect(button: &KeypadButton, inner: Rect, cell: (u16, u16)) -> Rect {
    let (cell_width, cell_height) = cell;
    Rect {
        x: inner.x + button.col as u16 * cell_width,
        y: inner.y + button.row as u16 * cell_height,
        width: button.col_span as u16 * cell_width,
        height: button.row_span as u16 * cell_height,
    }
}

fn button_style(button: &KeypadButton, pressed: bool) -> Style {
    if pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match button.action {
        KeypadAction::Digit(_) | KeypadAction::Decimal => Style::default().fg(Color::White),
        KeypadAction::Operator(_) => Style::default().fg(Color::Cyan),
        KeypadAction::Equals => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        KeypadAction::Clear => Style::default().fg(Color::Yellow),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            pressed: None,
        }
    }

    /// Highlights the button at `index`
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some(cell) = cell_size(self.keypad, area) else {
            return;
        };
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        for (index, button) in self.keypad.buttons().enumerate() {
            let rect = button_rect(button, inner, cell);
            let style = button_style(button, self.pressed == Some(index));

            let label = format!("[{}]", button.label());
            let label_width = label.chars().count() as u16;
            if label_width > rect.width {
                continue;
            }
            let x = rect.x + (rect.width - label_width) / 2;
            let y = rect.y + rect.height / 2;
            buf.set_span(x, y, &Span::styled(label, style), rect.width);
        }
    }
}
