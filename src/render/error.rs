use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal conditions reported by the renderer. Malformed markup is never
/// one of them.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The document could not be opened; nothing was rendered.
	#[error("document {} is unavailable", path.display())]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The document failed mid-stream. Lines before `line` were written.
	#[error("reading line {line} of the document failed")]
	ReadInterrupted {
		line: usize,
		#[source]
		source: io::Error,
	},

	/// The output sink rejected a write.
	#[error("failed to write rendered output")]
	Sink(#[source] io::Error),
}

impl RenderError {
	/// Number of lines fully rendered before the failure.
	pub fn lines_rendered(&self) -> Option<usize> {
		match self {
			Self::SourceUnavailable { .. } => Some(0),
			Self::ReadInterrupted { line, .. } => Some(line - 1),
			Self::Sink(_) => None,
		}
	}

	/// True when the reader of our output went away, e.g. `shortcut git | head`.
	pub fn is_broken_pipe(&self) -> bool {
		matches!(self, Self::Sink(err) if err.kind() == io::ErrorKind::BrokenPipe)
	}
}
