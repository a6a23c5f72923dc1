use std::path::PathBuf;

use shortcut::{PageStore, RenderOptions};

use super::ColourMode;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub pages_dir: PathBuf,
	pub extension: String,
	pub archive_url: String,
	pub colour: ColourMode,
	pub render: RenderOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Page store described by this configuration.
	pub fn page_store(&self) -> PageStore {
		PageStore::with_extension(&self.pages_dir, &self.extension)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
