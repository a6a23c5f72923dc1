//! Renderer for the shortcut page markup.
//!
//! Each line is classified by its first character (see [`Role`]). Everything
//! but a sigil is scanned for `{{ ... }}` description spans (see
//! [`SpanScanner`]), and every directive and character is handed to a
//! [`StyleEmitter`] in the order it was produced. Lines are independent: span state never carries over.

mod error;
mod role;
mod source;
mod span;
mod style;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

pub use error::RenderError;
pub use role::Role;
pub use source::LossyLines;
pub use span::{SpanEvent, SpanScanner};
pub use style::{Colour, Palette, StyleDirective, StyleEmitter, Tint};

/// Colour applied when a description span closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanClose {
	/// Re-apply the description colour. Matches the established page output.
	#[default]
	Description,
	/// Switch back to the colour of the enclosing line.
	RestoreRole,
}

impl SpanClose {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Description => "description",
			Self::RestoreRole => "restore-role",
		}
	}
}

/// Immutable settings for a [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
	pub styling: bool,
	pub palette: Palette,
	pub span_close: SpanClose,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			styling: true,
			palette: Palette::default(),
			span_close: SpanClose::default(),
		}
	}
}

impl RenderOptions {
	pub fn plain() -> Self {
		Self {
			styling: false,
			..Self::default()
		}
	}
}

/// Summary of a completed render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
	/// Lines consumed from the source.
	pub lines: usize,
	/// 1-based numbers of lines that ended inside a description span.
	pub unterminated_spans: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	pub fn new(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Render every line of `lines` into `sink`.
	///
	/// Output for lines already rendered stays in the sink if the source fails
	/// later on.
	pub fn render<I, W>(&self, lines: I, sink: &mut W) -> Result<RenderReport, RenderError>
	where
		I: IntoIterator<Item = io::Result<String>>,
		W: Write + ?Sized,
	{
		let mut emitter = StyleEmitter::new(sink, &self.options.palette, self.options.styling);
		let mut report = RenderReport::default();

		for (index, line) in lines.into_iter().enumerate() {
			let number = index + 1;
			let line = line.map_err(|source| RenderError::ReadInterrupted {
				line: number,
				source,
			})?;

			let open = self
				.render_line(&line, &mut emitter)
				.map_err(RenderError::Sink)?;
			if open {
				warn!(line = number, "description span is not closed before end of line");
				report.unterminated_spans.push(number);
			}
			report.lines = number;
		}

		debug!(lines = report.lines, "rendered document");
		Ok(report)
	}

	/// Render a single line including its terminator.
	///
	/// Returns `true` when the line ended inside a description span.
	pub fn render_line<W: Write>(
		&self,
		line: &str,
		emitter: &mut StyleEmitter<'_, W>,
	) -> io::Result<bool> {
		let mut chars = line.chars().peekable();
		let mut scanner = SpanScanner::new();

		// A sigil is consumed; any other first character is scanned like the rest.
		let role = match chars.peek().copied().and_then(Role::classify) {
			Some(role) => {
				chars.next();
				for directive in role.opening_directives() {
					emitter.directive(*directive)?;
				}
				role
			}
			None => Role::Plain,
		};

		while let Some(ch) = chars.next() {
			let event = scanner.step(ch, chars.peek().copied());
			self.emit(event, role, emitter)?;
		}

		emitter.end_line()?;
		Ok(scanner.inside())
	}

	fn emit<W: Write>(
		&self,
		event: SpanEvent,
		role: Role,
		emitter: &mut StyleEmitter<'_, W>,
	) -> io::Result<()> {
		match event {
			SpanEvent::Content(ch) => emitter.content(ch),
			SpanEvent::Open => emitter.directive(StyleDirective::Foreground(Tint::Description)),
			SpanEvent::Close => emitter.directive(self.close_directive(role)),
			SpanEvent::Skip => Ok(()),
		}
	}

	fn close_directive(&self, role: Role) -> StyleDirective {
		match self.options.span_close {
			SpanClose::Description => StyleDirective::Foreground(Tint::Description),
			SpanClose::RestoreRole => role
				.tint()
				.map_or(StyleDirective::ResetForeground, StyleDirective::Foreground),
		}
	}

	/// Render a string, mostly useful for previews and tests.
	pub fn render_to_string(&self, text: &str) -> String {
		let mut out: Vec<u8> = Vec::new();
		let lines = LossyLines::new(text.as_bytes());
		// Reading from a slice and writing to a Vec cannot fail.
		let _ = self.render(lines, &mut out);
		String::from_utf8_lossy(&out).into_owned()
	}
}

/// Open the document at `path` and render it.
pub fn render_path<W>(
	renderer: &Renderer,
	path: &Path,
	sink: &mut W,
) -> Result<RenderReport, RenderError>
where
	W: Write + ?Sized,
{
	let file = File::open(path).map_err(|source| RenderError::SourceUnavailable {
		path: path.to_path_buf(),
		source,
	})?;
	debug!(path = %path.display(), "rendering document");
	renderer.render(LossyLines::new(BufReader::new(file)), sink)
}
