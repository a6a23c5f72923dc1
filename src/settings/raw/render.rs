use serde::Deserialize;
use shortcut::{Colour, Palette, RenderOptions, SpanClose};

use crate::cli::CliArgs;
use crate::settings::ColourMode;

/// Rendering switches prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RenderSection {
	pub(super) colour: Option<ColourMode>,
	pub(super) span_close: Option<SpanClose>,
}

/// Per-role colour overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ColoursSection {
	pub(super) title: Option<Colour>,
	pub(super) category: Option<Colour>,
	pub(super) explanation: Option<Colour>,
	pub(super) shortcut: Option<Colour>,
	pub(super) description: Option<Colour>,
	pub(super) reset: Option<Colour>,
}

impl RenderSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(choice) = cli.colour_choice() {
			self.colour = Some(choice.into());
		}
		if let Some(span_close) = cli.span_close {
			self.span_close = Some(span_close.into());
		}
	}

	pub(super) fn options(&self, palette: Palette, styling: bool) -> RenderOptions {
		RenderOptions {
			styling,
			palette,
			span_close: self.span_close.unwrap_or_default(),
		}
	}
}

impl ColoursSection {
	pub(super) fn palette(&self) -> Palette {
		let defaults = Palette::default();
		Palette {
			title: self.title.unwrap_or(defaults.title),
			category: self.category.unwrap_or(defaults.category),
			explanation: self.explanation.unwrap_or(defaults.explanation),
			shortcut: self.shortcut.unwrap_or(defaults.shortcut),
			description: self.description.unwrap_or(defaults.description),
			reset: self.reset.unwrap_or(defaults.reset),
		}
	}
}
