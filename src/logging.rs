//! Diagnostics on stderr via `tracing`.
//!
//! Page output goes to stdout untouched; everything logged here goes to
//! stderr so pipes like `shortcut git | less` stay clean.

use tracing_subscriber::EnvFilter;

/// Variable holding an explicit filter, e.g. `SHORTCUT_LOG=shortcut=debug`.
pub const LOG_ENV: &str = "SHORTCUT_LOG";

/// Default filter for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber. Calling it twice keeps the first one.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.try_init();
}
