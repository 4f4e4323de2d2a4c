//! TUI rendering
//!
//! Display panel on top, keypad below, one help line at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::driver::CalculatorDriver;

/// Help line shown under the keypad
pub const HELP_LINE: &str = "Enter: =  Esc: AC  q: quit";

/// Width of the calculator panel
pub const PANEL_WIDTH: u16 = 30;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the frame into (display, keypad, help) areas
#[must_use]
pub fn layout(area: Rect) -> [Rect; 3] {
    let panel = Rect {
        width: area.width.min(PANEL_WIDTH),
        ..area
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(12),   // Keypad
            Constraint::Length(1), // Help
        ])
        .split(panel);
    [chunks[0], chunks[1], chunks[2]]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        // Keep the end of long expressions visible
        let inner_width = area.width.saturating_sub(2) as usize;
        let text = state.display();
        let visible: String = {
            let count = text.chars().count();
            text.chars().skip(count.saturating_sub(inner_width)).collect()
        };

        Paragraph::new(Span::styled(visible, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(format!(" {} ", self.app.title()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [display, keypad, help] = layout(area);
        self.render_display(display, buf);
        KeypadWidget::new(self.app.keypad())
            .pressed(self.app.pressed())
            .render(keypad, buf);
        self.render_help(help, buf);
    }
}
