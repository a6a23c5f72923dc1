//! Local store of cheat-sheet pages, one file per program name.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Extension used by the published page archive.
pub const DEFAULT_EXTENSION: &str = ".md";

#[derive(Debug, Error)]
pub enum PageError {
	#[error("invalid program name \"{0}\"")]
	InvalidName(String),

	#[error("no page available for \"{0}\"")]
	NotFound(String),

	#[error("pages directory {} does not exist, run `shortcut --update` first", .0.display())]
	MissingDirectory(PathBuf),

	#[error("failed to read pages directory {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// A directory of pages named `<program><extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStore {
	dir: PathBuf,
	extension: String,
}

impl PageStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self::with_extension(dir, DEFAULT_EXTENSION)
	}

	pub fn with_extension(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
		Self {
			dir: dir.into(),
			extension: extension.into(),
		}
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Path of the page for `name`.
	///
	/// The name must be a single plain path component, so `../etc/passwd`,
	/// `a/b` and `.` are all rejected.
	pub fn path_for(&self, name: &str) -> Result<PathBuf, PageError> {
		let mut components = Path::new(name).components();
		match (components.next(), components.next()) {
			(Some(Component::Normal(part)), None) if part == name => {
				Ok(self.dir.join(format!("{name}{}", self.extension)))
			}
			_ => Err(PageError::InvalidName(name.to_string())),
		}
	}

	/// Names of every page in the store, sorted.
	pub fn list(&self) -> Result<Vec<String>, PageError> {
		let entries = match fs::read_dir(&self.dir) {
			Ok(entries) => entries,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				return Err(PageError::MissingDirectory(self.dir.clone()));
			}
			Err(source) => {
				return Err(PageError::Io {
					path: self.dir.clone(),
					source,
				});
			}
		};

		let mut names = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|source| PageError::Io {
				path: self.dir.clone(),
				source,
			})?;
			if !entry.path().is_file() {
				continue;
			}
			let file_name = entry.file_name();
			let Some(file_name) = file_name.to_str() else {
				continue;
			};
			if let Some(name) = file_name.strip_suffix(self.extension.as_str())
				&& !name.is_empty()
			{
				names.push(name.to_string());
			}
		}

		names.sort();
		debug!(dir = %self.dir.display(), pages = names.len(), "listed pages");
		Ok(names)
	}
}
