//! Layout command handler - prints the keypad grid

use std::io::Write;

use padcalc::keypad::Keypad;

use crate::commands::LayoutArgs;
use crate::error::CliResult;

/// Executes the layout command
pub fn execute_layout<W: Write>(args: &LayoutArgs, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    write!(out, "{}", keypad.render_text(usize::from(args.cell_width)))?;
    Ok(())
}
