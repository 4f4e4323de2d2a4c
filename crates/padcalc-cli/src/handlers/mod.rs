//! Command handlers - extracted from main.rs for testability
//!
//! Each handler writes its result to the given writer and returns an error
//! when the command should exit with a failure status.

pub mod eval;
pub mod keys;
pub mod layout;
pub mod tui;

pub use eval::{execute_eval, EvalReport};
pub use keys::{execute_keys, press_script, KeysReport, KeyStep};
pub use layout::execute_layout;
pub use tui::execute_tui;

use console::Style;
use padcalc::core::ERROR_DISPLAY;

/// Styles a display string for terminal output; `Error` is shown in red
#[must_use]
pub fn styled_display(display: &str, color: bool) -> String {
    let style = if display == ERROR_DISPLAY {
        Style::new().red().bold()
    } else {
        Style::new().green()
    };
    style.force_styling(color).apply_to(display).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_display_plain() {
        assert_eq!(styled_display("42", false), "42");
        assert_eq!(styled_display("Error", false), "Error");
    }

    #[test]
    fn test_styled_display_colored() {
        let styled = styled_display("Error", true);
        assert!(styled.contains("Error"));
        assert!(styled.contains('\u{1b}'));
    }
}
