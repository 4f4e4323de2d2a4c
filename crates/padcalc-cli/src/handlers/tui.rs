//! Tui command handler

use crate::error::CliResult;

/// Runs the interactive terminal keypad
#[cfg(feature = "tui")]
pub fn execute_tui() -> CliResult<()> {
    padcalc::tui::run()?;
    Ok(())
}

/// Runs the interactive terminal keypad
#[cfg(not(feature = "tui"))]
pub fn execute_tui() -> CliResult<()> {
    Err(crate::error::CliError::invalid_argument(
        "terminal UI not enabled. Rebuild with --features tui",
    ))
}
