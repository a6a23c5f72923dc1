use std::env;
use std::io::{self, IsTerminal};

use serde::Deserialize;

/// When page output is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourMode {
	/// Style when stdout is a terminal and `NO_COLOR` is unset.
	#[default]
	Auto,
	Always,
	Never,
}

impl ColourMode {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Auto => "auto",
			Self::Always => "always",
			Self::Never => "never",
		}
	}

	pub(crate) fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
		match self {
			Self::Always => true,
			Self::Never => false,
			Self::Auto => is_terminal && !no_color,
		}
	}

	/// Decide against the real stdout and environment.
	pub(crate) fn detect(self) -> bool {
		let no_color = env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
		self.enabled(io::stdout().is_terminal(), no_color)
	}
}
