//! Terminal event loop
//!
//! Raw mode, alternate screen and mouse capture are restored on every exit path.

use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use super::{layout, render, CalculatorApp, InputHandler, KeyAction};

/// Runs the interactive calculator until the user quits
pub fn run() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Applies one key action; returns true when the app should stop
pub fn handle_action(app: &mut CalculatorApp, action: KeyAction) -> bool {
    match action {
        KeyAction::Keypad(key) => app.press_action(key),
        KeyAction::Quit => app.quit(),
        KeyAction::None => app.release(),
    }
    app.should_quit()
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let mut app = CalculatorApp::new();
    let input = InputHandler::new();
    let mut title = String::new();

    loop {
        if app.title() != title {
            title = app.title();
            execute!(terminal.backend_mut(), SetTitle(&title))?;
        }

        let mut keypad_area = ratatui::layout::Rect::default();
        terminal.draw(|frame| {
            keypad_area = layout(frame.area())[1];
            render(&app, frame);
        })?;

        let quit = match event::read()? {
            Event::Key(key) => handle_action(&mut app, input.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                app.click(keypad_area, column, row);
                false
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                ..
            }) => {
                app.release();
                false
            }
            other => {
                debug!(?other, "ignored terminal event");
                false
            }
        };

        if quit {
            break;
        }
    }

    // Drop the observers first so the default title is written back
    drop(app);
    execute!(terminal.backend_mut(), SetTitle(crate::session::DEFAULT_TITLE))
}
