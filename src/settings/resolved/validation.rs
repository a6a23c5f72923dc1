use std::path::MAIN_SEPARATOR;

use shortcut::update::validate_url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let extension = config.extension.as_str();
	let reason = if !extension.starts_with('.') {
		Some("must start with '.'")
	} else if extension.len() == 1 {
		Some("must name an extension after the '.'")
	} else if extension.contains(['/', MAIN_SEPARATOR]) {
		Some("must not contain a path separator")
	} else {
		None
	};
	if let Some(reason) = reason {
		return Err(ConfigError::invalid(
			"pages.extension",
			extension,
			sources.source_for_extension(),
			reason,
		));
	}

	if let Err(err) = validate_url(&config.archive_url) {
		return Err(ConfigError::invalid(
			"pages.archive_url",
			config.archive_url.as_str(),
			sources.source_for_archive_url(),
			err.to_string(),
		));
	}

	Ok(())
}
