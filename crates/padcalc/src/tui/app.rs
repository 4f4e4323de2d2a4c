//! TUI Application State
//!
//! Wraps a [`Calculator`] session with the keypad highlight and quit flag.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;

use crate::core::{CalcState, KeypadAction};
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;
use crate::session::{Calculator, ResultLogger, TitleObserver, DEFAULT_TITLE};

use super::keypad::hit_test;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    /// Index of the highlighted keypad button
    pressed: Option<usize>,
    /// Title written by the title observer
    title: Rc<RefCell<String>>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app with the title observer and result logger attached
    #[must_use]
    pub fn new() -> Self {
        let title = Rc::new(RefCell::new(DEFAULT_TITLE.to_string()));
        let sink = Rc::clone(&title);
        let calculator = Calculator::new()
            .with_observer(TitleObserver::new(move |t: &str| {
                t.clone_into(&mut sink.borrow_mut());
            }))
            .with_observer(ResultLogger::new());

        Self {
            calculator,
            keypad: Keypad::new(),
            pressed: None,
            title,
            should_quit: false,
        }
    }

    /// Returns the calculator session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the highlighted button index
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Current window title
    #[must_use]
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a keypad button and highlights it
    pub fn press_action(&mut self, action: KeypadAction) {
        self.pressed = self.keypad.find_by_action(action);
        self.calculator.press(action);
    }

    /// Handles a mouse click at terminal position (x, y) over the keypad area
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        let action = hit_test(&self.keypad, keypad_area, x, y)
            .and_then(|index| self.keypad.get_button(index))
            .map(|button| button.action);
        match action {
            Some(action) => self.press_action(action),
            None => self.release(),
        }
    }

    /// Clears the button highlight
    pub fn release(&mut self) {
        self.pressed = None;
    }
}

impl CalculatorDriver for CalculatorApp {
    fn press(&mut self, action: KeypadAction) {
        self.press_action(action);
    }

    fn state(&self) -> &CalcState {
        self.calculator.state()
    }
}
