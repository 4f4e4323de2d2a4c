//! padcalc: four-function keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! padcalc keys "12+30="            # Press keys, print the display
//! padcalc keys "5*-3=" --trace     # Show the display after each key
//! padcalc eval "2+3*4" -f json     # Evaluate an expression
//! padcalc layout                   # Print the keypad
//! padcalc tui                      # Interactive keypad
//! ```

use clap::Parser;
use padcalc_cli::{
    handlers::{execute_eval, execute_keys, execute_layout, execute_tui},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    // The terminal UI owns the screen; only log there when explicitly asked
    if !matches!(cli.command, Commands::Tui) || config.log_filter.is_some() {
        logging::init(&config);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Commands::Keys(args) => execute_keys(&config, args, &mut out),
        Commands::Eval(args) => execute_eval(&config, args, &mut out),
        Commands::Layout(args) => execute_layout(args, &mut out),
        Commands::Tui => {
            drop(out);
            return execute_tui();
        }
    };
    out.flush()?;
    result
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_log_filter(cli.log_filter.clone())
}
