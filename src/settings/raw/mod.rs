use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod pages;
mod render;

use pages::PagesSection;
use render::{ColoursSection, RenderSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pages: PagesSection,
	render: RenderSection,
	colours: ColoursSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.pages.apply_cli_overrides(cli);
		self.render.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			pages_extension: detect_source(
				false,
				self.pages.extension.is_some(),
				"SHORTCUT__PAGES__EXTENSION",
				"",
				"pages.extension",
			),
			pages_archive_url: detect_source(
				cli.archive_url.is_some(),
				self.pages.archive_url.is_some(),
				"SHORTCUT__PAGES__ARCHIVE_URL",
				"--archive-url",
				"pages.archive_url",
			),
		};

		let pages = self.pages.resolve()?;
		let colour = self.render.colour.unwrap_or_default();
		let render = self.render.options(self.colours.palette(), colour.detect());

		let config = ResolvedConfig {
			pages_dir: pages.dir,
			extension: pages.extension,
			archive_url: pages.archive_url,
			colour,
			render,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
