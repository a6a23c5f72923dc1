//! Resolve configuration and page cache directories for `shortcut`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "shortcut-pages";
const APPLICATION: &str = "shortcut";

pub const CONFIG_DIR_ENV: &str = "SHORTCUT_CONFIG_DIR";
pub const CACHE_DIR_ENV: &str = "SHORTCUT_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for shortcut"))
}

/// Read a directory override. An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Cache root; downloaded pages live below it.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Default location of the page store.
pub fn get_pages_dir() -> Result<PathBuf> {
	Ok(get_cache_dir()?.join("pages"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_variable_is_none() {
		assert_eq!(dir_from_env("SHORTCUT_TEST_SURELY_UNSET_VARIABLE"), None);
	}

	#[test]
	fn pages_dir_is_below_cache_dir() {
		if let (Ok(cache), Ok(pages)) = (get_cache_dir(), get_pages_dir()) {
			assert_eq!(pages, cache.join("pages"));
		}
	}
}
