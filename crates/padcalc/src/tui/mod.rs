//! Terminal front-end for the keypad calculator

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use terminal::{handle_action, run};
pub use ui::{layout, render, CalculatorUI};
