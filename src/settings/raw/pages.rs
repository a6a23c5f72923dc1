use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use shortcut::app_dirs;
use shortcut::pages::DEFAULT_EXTENSION;
use shortcut::update::DEFAULT_ARCHIVE_URL;

use crate::cli::CliArgs;

/// Page store settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PagesSection {
	pub(super) dir: Option<PathBuf>,
	pub(super) extension: Option<String>,
	pub(super) archive_url: Option<String>,
}

pub(super) struct PagesResolution {
	pub(super) dir: PathBuf,
	pub(super) extension: String,
	pub(super) archive_url: String,
}

impl PagesSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.pages_dir.clone() {
			self.dir = Some(dir);
		}
		if let Some(url) = cli.archive_url.clone() {
			self.archive_url = Some(url);
		}
	}

	pub(super) fn resolve(self) -> Result<PagesResolution> {
		let mut dir = match self.dir {
			Some(dir) => dir,
			None => app_dirs::get_pages_dir()?,
		};
		if dir.is_relative() {
			dir = env::current_dir()
				.context("failed to resolve current directory for pages directory")?
				.join(dir);
		}

		let extension = self
			.extension
			.map(|ext| ext.trim().to_string())
			.unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
		let archive_url = self
			.archive_url
			.map(|url| url.trim().to_string())
			.unwrap_or_else(|| DEFAULT_ARCHIVE_URL.to_string());

		Ok(PagesResolution {
			dir,
			extension,
			archive_url,
		})
	}
}
