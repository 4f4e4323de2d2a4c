//! Eval command handler - evaluates a whole expression at once

use std::io::Write;

use padcalc::core::CalcState;
use serde::Serialize;
use tracing::{info, warn};

use super::styled_display;
use crate::commands::EvalArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// Outcome of evaluating one expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// The expression as given
    pub expression: String,
    /// What the calculator display shows afterwards
    pub display: String,
    /// Whether the expression was valid
    pub ok: bool,
    /// Why the expression was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Executes the eval command.
///
/// An invalid expression still prints `Error`, then fails with the parse error.
pub fn execute_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let (state, outcome) = CalcState::with_display(args.expression.trim()).evaluate_detailed();
    let report = EvalReport {
        expression: args.expression.clone(),
        display: state.display().to_string(),
        ok: outcome.is_ok(),
        error: outcome.as_ref().err().map(ToString::to_string),
    };

    match &outcome {
        Ok(_) => info!(expression = %args.expression, result = %report.display, "evaluated"),
        Err(e) => warn!(expression = %args.expression, error = %e, "invalid expression"),
    }

    match OutputFormat::from(args.format) {
        OutputFormat::Text => {
            writeln!(out, "{}", styled_display(&report.display, config.color.should_color()))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    outcome?;
    Ok(())
}
