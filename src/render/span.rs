//! Inline `{{ ... }}` description spans.
//!
//! The scanner sees every character of a line except a leading sigil,
//! together with a one-character lookahead. A brace followed by the same brace is a
//! delimiter. A brace that directly follows a consumed delimiter of the same
//! kind is swallowed as its partner. Every other brace is plain text. There is
//! no index arithmetic, so the first and last positions of a line need no
//! special casing: a missing neighbour simply never matches.

/// What the renderer should do with one scanned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanEvent {
	/// Echo the character.
	Content(char),
	/// `{{` starts a description span.
	Open,
	/// `}}` ends a description span.
	Close,
	/// Second brace of a delimiter that was already signalled.
	Skip,
}

/// Per-line span state. Create a fresh scanner for every line.
#[derive(Debug, Default, Clone)]
pub struct SpanScanner {
	inside: bool,
	consumed: Option<char>,
}

impl SpanScanner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether an opened span has not been closed yet.
	pub fn inside(&self) -> bool {
		self.inside
	}

	pub fn step(&mut self, ch: char, next: Option<char>) -> SpanEvent {
		let event = match ch {
			'{' if next == Some('{') => {
				self.inside = true;
				SpanEvent::Open
			}
			'}' if next == Some('}') => {
				self.inside = false;
				SpanEvent::Close
			}
			'{' | '}' if self.consumed == Some(ch) => SpanEvent::Skip,
			other => SpanEvent::Content(other),
		};

		self.consumed = match event {
			SpanEvent::Open => Some('{'),
			SpanEvent::Close => Some('}'),
			SpanEvent::Content(_) | SpanEvent::Skip => None,
		};

		event
	}
}
