//! Style directives and the emitter that turns them into terminal output.
//!
//! Directives are abstract: the [`Palette`] maps each one to an SGR parameter
//! and the [`StyleEmitter`] writes it to the sink at the exact point it was
//! produced. Nothing is buffered or deduplicated within a line.

use std::io::{self, Write};

use serde::Deserialize;

const ESC: &str = "\x1b[";
const BOLD_ON: u8 = 1;
const BOLD_OFF: u8 = 22;

/// Foreground slots a directive may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
	Title,
	Category,
	Explanation,
	Shortcut,
	Description,
}

/// A single rendering instruction. Carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDirective {
	BoldOn,
	BoldOff,
	Foreground(Tint),
	ResetForeground,
}

/// Named ANSI foreground colours accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Colour {
	/// The terminal's own foreground colour.
	#[default]
	Default,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	White,
	BrightBlack,
	BrightRed,
	BrightGreen,
	BrightYellow,
	BrightBlue,
	BrightMagenta,
	BrightCyan,
	BrightWhite,
}

impl Colour {
	/// SGR parameter selecting this colour as foreground.
	pub fn sgr(self) -> u8 {
		match self {
			Self::Default => 39,
			Self::Black => 30,
			Self::Red => 31,
			Self::Green => 32,
			Self::Yellow => 33,
			Self::Blue => 34,
			Self::Magenta => 35,
			Self::Cyan => 36,
			Self::White => 37,
			Self::BrightBlack => 90,
			Self::BrightRed => 91,
			Self::BrightGreen => 92,
			Self::BrightYellow => 93,
			Self::BrightBlue => 94,
			Self::BrightMagenta => 95,
			Self::BrightCyan => 96,
			Self::BrightWhite => 97,
		}
	}

	/// Lowercase name as written in configuration files.
	pub fn name(self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Black => "black",
			Self::Red => "red",
			Self::Green => "green",
			Self::Yellow => "yellow",
			Self::Blue => "blue",
			Self::Magenta => "magenta",
			Self::Cyan => "cyan",
			Self::White => "white",
			Self::BrightBlack => "bright-black",
			Self::BrightRed => "bright-red",
			Self::BrightGreen => "bright-green",
			Self::BrightYellow => "bright-yellow",
			Self::BrightBlue => "bright-blue",
			Self::BrightMagenta => "bright-magenta",
			Self::BrightCyan => "bright-cyan",
			Self::BrightWhite => "bright-white",
		}
	}
}

/// Colour assignment for every tint, fixed for the lifetime of a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	pub title: Colour,
	pub category: Colour,
	pub explanation: Colour,
	pub shortcut: Colour,
	pub description: Colour,
	pub reset: Colour,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			title: Colour::Default,
			category: Colour::White,
			explanation: Colour::White,
			shortcut: Colour::Green,
			description: Colour::White,
			reset: Colour::Default,
		}
	}
}

impl Palette {
	pub fn colour(&self, tint: Tint) -> Colour {
		match tint {
			Tint::Title => self.title,
			Tint::Category => self.category,
			Tint::Explanation => self.explanation,
			Tint::Shortcut => self.shortcut,
			Tint::Description => self.description,
		}
	}

	/// SGR parameter for a directive.
	pub fn sgr(&self, directive: StyleDirective) -> u8 {
		match directive {
			StyleDirective::BoldOn => BOLD_ON,
			StyleDirective::BoldOff => BOLD_OFF,
			StyleDirective::Foreground(tint) => self.colour(tint).sgr(),
			StyleDirective::ResetForeground => self.reset.sgr(),
		}
	}

	/// Escape sequence for a directive.
	pub fn fragment(&self, directive: StyleDirective) -> String {
		format!("{ESC}{}m", self.sgr(directive))
	}
}

/// Writes content and directives to a sink, gated by the styling flag.
pub struct StyleEmitter<'p, W> {
	sink: W,
	palette: &'p Palette,
	styling: bool,
}

impl<'p, W: Write> StyleEmitter<'p, W> {
	pub fn new(sink: W, palette: &'p Palette, styling: bool) -> Self {
		Self {
			sink,
			palette,
			styling,
		}
	}

	/// Write a directive. A no-op when styling is disabled.
	pub fn directive(&mut self, directive: StyleDirective) -> io::Result<()> {
		if !self.styling {
			return Ok(());
		}
		self.sink.write_all(self.palette.fragment(directive).as_bytes())
	}

	pub fn content(&mut self, ch: char) -> io::Result<()> {
		let mut buf = [0u8; 4];
		self.sink.write_all(ch.encode_utf8(&mut buf).as_bytes())
	}

	/// Close the current line: bold off and colour reset when styling, then
	/// the terminator.
	pub fn end_line(&mut self) -> io::Result<()> {
		self.directive(StyleDirective::BoldOff)?;
		self.directive(StyleDirective::ResetForeground)?;
		self.sink.write_all(b"\n")
	}

	pub fn into_inner(self) -> W {
		self.sink
	}
}
