use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use shortcut::update::DEFAULT_ARCHIVE_URL;
use shortcut::{PageError, PageStore, app_dirs};

/// Version banner with the locations and state of the local page store.
pub(super) fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let pages = match app_dirs::get_pages_dir() {
		Ok(dir) => describe_store(&PageStore::new(dir)),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("shortcut {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "pages directory: {pages}");
	let _ = writeln!(details, "archive: {DEFAULT_ARCHIVE_URL}");

	Box::leak(details.into_boxed_str())
}

/// Directory of the store followed by how many pages it holds.
fn describe_store(store: &PageStore) -> String {
	let dir = store.dir().display();
	match store.list() {
		Ok(names) if names.is_empty() => format!("{dir} (empty, run --update)"),
		Ok(names) => format!("{dir} ({} pages)", names.len()),
		Err(PageError::MissingDirectory(_)) => format!("{dir} (not downloaded yet)"),
		Err(err) => format!("{dir} ({err})"),
	}
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn store_description_counts_pages() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("git.md"), "# git\n").unwrap();
		fs::write(dir.path().join("vim.md"), "# vim\n").unwrap();

		let text = describe_store(&PageStore::new(dir.path()));
		assert!(text.ends_with("(2 pages)"), "{text}");
	}

	#[test]
	fn store_description_flags_missing_and_empty_stores() {
		let dir = tempdir().unwrap();
		assert!(describe_store(&PageStore::new(dir.path())).ends_with("(empty, run --update)"));
		assert!(describe_store(&PageStore::new(dir.path().join("absent"))).ends_with("(not downloaded yet)"));
	}

	#[test]
	fn banner_names_the_archive() {
		assert!(long_version().contains(DEFAULT_ARCHIVE_URL));
	}
}
