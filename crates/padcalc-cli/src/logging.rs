//! Log subscriber setup
//!
//! Logs always go to stderr so stdout stays clean for results.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Builds the filter for `config`, falling back to its verbosity level when the
/// explicit directives do not parse
#[must_use]
pub fn build_filter(config: &CliConfig) -> EnvFilter {
    let fallback = config.verbosity.log_level();
    EnvFilter::try_new(config.effective_log_filter()).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter: {e}");
        EnvFilter::new(fallback)
    })
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(config: &CliConfig) {
    let ansi = config.color.should_color() && std::io::IsTerminal::is_terminal(&std::io::stderr());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
