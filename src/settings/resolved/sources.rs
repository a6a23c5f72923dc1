use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) pages_extension: Option<SettingSource>,
	pub(crate) pages_archive_url: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_extension(&self) -> SettingSource {
		self.pages_extension
			.clone()
			.unwrap_or(SettingSource::ConfigKey("pages.extension"))
	}

	pub(crate) fn source_for_archive_url(&self) -> SettingSource {
		self.pages_archive_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("pages.archive_url"))
	}
}
