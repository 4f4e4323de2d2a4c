//! Keys command handler - feeds a keystroke script through the calculator

use std::io::Write;

use padcalc::core::CalcState;
use padcalc::driver::parse_script;
use padcalc::session::{Calculator, ResultLogger};
use serde::Serialize;
use tracing::debug;

use super::styled_display;
use crate::commands::KeysArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// One traced keystroke
#[derive(Debug, Clone, Serialize)]
pub struct KeyStep {
    /// The keystroke as typed
    pub key: String,
    /// State after the keystroke
    pub state: CalcState,
}

/// Outcome of a keystroke script
#[derive(Debug, Clone, Serialize)]
pub struct KeysReport {
    /// The script as given
    pub script: String,
    /// Final state
    pub state: CalcState,
    /// Per-key states, only collected when tracing
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<KeyStep>,
}

/// Presses every key of `script` on a fresh calculator.
///
/// The whole script is validated before the first key is pressed.
pub fn press_script(script: &str, trace: bool) -> CliResult<KeysReport> {
    let actions = parse_script(script)?;
    let mut calculator = Calculator::new().with_observer(ResultLogger::new());
    let mut steps = Vec::new();

    for action in actions {
        let state = calculator.press(action);
        if trace {
            steps.push(KeyStep {
                key: action.to_char().to_string(),
                state: state.clone(),
            });
        }
    }
    debug!(keys = script.len(), display = calculator.display(), "script finished");

    Ok(KeysReport {
        script: script.to_string(),
        state: calculator.state().clone(),
        steps,
    })
}

/// Executes the keys command
pub fn execute_keys<W: Write>(config: &CliConfig, args: &KeysArgs, out: &mut W) -> CliResult<()> {
    let report = press_script(&args.script, args.trace)?;
    match OutputFormat::from(args.format) {
        OutputFormat::Text => {
            let color = config.color.should_color();
            for step in &report.steps {
                writeln!(
                    out,
                    "{}  {}",
                    step.key,
                    styled_display(step.state.display(), color)
                )?;
            }
            writeln!(out, "{}", styled_display(report.state.display(), color))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
