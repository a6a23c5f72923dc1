use clap::ValueEnum;
use shortcut::SpanClose;

use crate::settings::ColourMode;

/// When to colour page output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ColourArg {
	Auto,
	Always,
	Never,
}

impl From<ColourArg> for ColourMode {
	fn from(arg: ColourArg) -> Self {
		match arg {
			ColourArg::Auto => ColourMode::Auto,
			ColourArg::Always => ColourMode::Always,
			ColourArg::Never => ColourMode::Never,
		}
	}
}

/// Colour applied after a `}}` delimiter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SpanCloseArg {
	Description,
	RestoreRole,
}

impl From<SpanCloseArg> for SpanClose {
	fn from(arg: SpanCloseArg) -> Self {
		match arg {
			SpanCloseArg::Description => SpanClose::Description,
			SpanCloseArg::RestoreRole => SpanClose::RestoreRole,
		}
	}
}

/// Output formats supported by `--list`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
