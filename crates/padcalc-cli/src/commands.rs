//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// padcalc: four-function keypad calculator
#[derive(Parser, Debug)]
#[command(name = "padcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Log filter directives, overriding -v/-q (e.g. "padcalc=debug")
    #[arg(long, env = "PADCALC_LOG", global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keypad buttons and print the display
    ///
    /// Each character of SCRIPT is one key: digits, + - * / (or x), `.`,
    /// `=` and `C` for AC. Whitespace is ignored.
    Keys(KeysArgs),

    /// Evaluate one arithmetic expression
    Eval(EvalArgs),

    /// Print the keypad layout
    Layout(LayoutArgs),

    /// Run the interactive terminal keypad
    Tui,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Keystrokes to press, e.g. "12+3="
    #[arg(allow_hyphen_values = true)]
    pub script: String,

    /// Print the display after every keystroke
    #[arg(short, long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression such as "2+3*4"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the layout command
#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Width of one grid cell in characters
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u16).range(3..=32))]
    pub cell_width: u16,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, OutputFormat};
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_keys() {
        let cli = parse(&["padcalc", "keys", "12+3=", "--trace"]);
        match cli.command {
            Commands::Keys(args) => {
                assert_eq!(args.script, "12+3=");
                assert!(args.trace);
                assert_eq!(args.format, FormatArg::Text);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_keys_leading_minus() {
        let cli = parse(&["padcalc", "keys", "-5="]);
        match cli.command {
            Commands::Keys(args) => assert_eq!(args.script, "-5="),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_json() {
        let cli = parse(&["padcalc", "eval", "2*3", "--format", "json"]);
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.expression, "2*3");
                assert_eq!(args.format, FormatArg::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_layout_cell_width() {
        let cli = parse(&["padcalc", "layout", "--cell-width", "7"]);
        match cli.command {
            Commands::Layout(args) => assert_eq!(args.cell_width, 7),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["padcalc", "layout", "--cell-width", "1"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["padcalc", "-vv", "--color", "never", "layout"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);

        let cli = parse(&["padcalc", "tui", "-q"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Tui));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["padcalc"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
    }
}
