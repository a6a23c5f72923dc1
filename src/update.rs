//! Refresh the local page store from the published archive.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};
use ureq::Agent;
use url::Url;
use zip::ZipArchive;

pub const DEFAULT_ARCHIVE_URL: &str =
	"https://github.com/mt-empty/shortcut-pages/releases/latest/download/shortcuts.zip";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for the archive body (50 MB).
const MAX_ARCHIVE_SIZE: u64 = 50 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UpdateError {
	#[error("writing to {} requires elevated privileges, please run with sudo", .0.display())]
	PermissionRequired(PathBuf),

	#[error("unsupported archive URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("failed to download {url}")]
	Download {
		url: String,
		#[source]
		source: ureq::Error,
	},

	#[error("failed to read page archive")]
	Archive(#[from] zip::result::ZipError),

	#[error("failed to write {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl UpdateError {
	fn io(path: &Path, source: io::Error) -> Self {
		Self::Io {
			path: path.to_path_buf(),
			source,
		}
	}
}

/// Outcome of a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
	pub dir: PathBuf,
	pub files: usize,
}

/// Downloads the page archive and unpacks it into a directory.
#[derive(Debug, Clone)]
pub struct Updater {
	url: String,
	timeout: Duration,
	max_size: u64,
}

impl Updater {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			timeout: HTTP_TIMEOUT,
			max_size: MAX_ARCHIVE_SIZE,
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Probe, download, then extract into `dir`.
	pub fn run(&self, dir: &Path) -> Result<UpdateSummary, UpdateError> {
		if requires_elevation(dir)? {
			return Err(UpdateError::PermissionRequired(dir.to_path_buf()));
		}

		let archive = self.download()?;
		info!(bytes = archive.len(), "downloaded page archive");

		let files = extract(&archive, dir)?;
		info!(files, dir = %dir.display(), "extracted page archive");

		Ok(UpdateSummary {
			dir: dir.to_path_buf(),
			files,
		})
	}

	/// Fetch the archive body.
	pub fn download(&self) -> Result<Vec<u8>, UpdateError> {
		validate_url(&self.url)?;
		debug!(url = %self.url, "downloading page archive");

		let agent: Agent = Agent::config_builder()
			.timeout_global(Some(self.timeout))
			.build()
			.into();

		let download_error = |source| UpdateError::Download {
			url: self.url.clone(),
			source,
		};

		agent
			.get(&self.url)
			.header("User-Agent", concat!("shortcut/", env!("CARGO_PKG_VERSION")))
			.call()
			.map_err(download_error)?
			.into_body()
			.with_config()
			.limit(self.max_size)
			.read_to_vec()
			.map_err(download_error)
	}
}

/// Accept only `http` and `https` URLs with a host.
pub fn validate_url(raw: &str) -> Result<Url, UpdateError> {
	let invalid = |reason: String| UpdateError::InvalidUrl {
		url: raw.to_string(),
		reason,
	};

	let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
	match url.scheme() {
		"http" | "https" => {}
		other => return Err(invalid(format!("scheme '{other}' is not supported"))),
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("missing host".to_string()));
	}
	Ok(url)
}

/// Whether writing into `dir` is denied for the current user.
///
/// Creates `dir` if needed and probes it with a temporary file that is
/// removed again. Errors other than a permission denial are returned.
pub fn requires_elevation(dir: &Path) -> Result<bool, UpdateError> {
	if let Err(err) = fs::create_dir_all(dir) {
		return match err.kind() {
			io::ErrorKind::PermissionDenied => Ok(true),
			_ => Err(UpdateError::io(dir, err)),
		};
	}

	match tempfile::Builder::new()
		.prefix(".shortcut-probe")
		.tempfile_in(dir)
	{
		Ok(_probe) => Ok(false),
		Err(err) if err.kind() == io::ErrorKind::PermissionDenied => Ok(true),
		Err(err) => Err(UpdateError::io(dir, err)),
	}
}

/// Unpack a zip archive into `dir`, returning the number of files written.
///
/// Entries whose names would escape `dir` are skipped.
pub fn extract(archive: &[u8], dir: &Path) -> Result<usize, UpdateError> {
	let mut archive = ZipArchive::new(Cursor::new(archive))?;
	fs::create_dir_all(dir).map_err(|err| UpdateError::io(dir, err))?;

	let mut written = 0;
	for index in 0..archive.len() {
		let mut entry = archive.by_index(index)?;
		let Some(relative) = entry.enclosed_name() else {
			warn!(name = entry.name(), "skipping archive entry outside the pages directory");
			continue;
		};
		let target = dir.join(&relative);

		if entry.is_dir() {
			fs::create_dir_all(&target).map_err(|err| UpdateError::io(&target, err))?;
			continue;
		}

		if let Some(parent) = target.parent() {
			fs::create_dir_all(parent).map_err(|err| UpdateError::io(parent, err))?;
		}
		let mut out = File::create(&target).map_err(|err| UpdateError::io(&target, err))?;
		io::copy(&mut entry, &mut out).map_err(|err| UpdateError::io(&target, err))?;
		written += 1;
	}

	Ok(written)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use rstest::rstest;
	use tempfile::tempdir;
	use zip::ZipWriter;
	use zip::write::SimpleFileOptions;

	use super::*;

	fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
		let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
		for (name, body) in entries {
			if name.ends_with('/') {
				writer.add_directory(*name, SimpleFileOptions::default()).unwrap();
			} else {
				writer.start_file(*name, SimpleFileOptions::default()).unwrap();
				writer.write_all(body.as_bytes()).unwrap();
			}
		}
		writer.finish().unwrap().into_inner()
	}

	#[test]
	fn extracts_files_and_directories() {
		let dir = tempdir().unwrap();
		let bytes = archive(&[
			("git.md", "# git\n"),
			("extra/", ""),
			("extra/tmux.md", "# tmux\n"),
		]);

		let written = extract(&bytes, dir.path()).unwrap();

		assert_eq!(written, 2);
		assert_eq!(fs::read_to_string(dir.path().join("git.md")).unwrap(), "# git\n");
		assert!(dir.path().join("extra/tmux.md").is_file());
	}

	#[test]
	fn skips_entries_that_escape_the_target() {
		let root = tempdir().unwrap();
		let dir = root.path().join("pages");
		let bytes = archive(&[("../evil.md", "x"), ("ok.md", "y")]);

		let written = extract(&bytes, &dir).unwrap();

		assert_eq!(written, 1);
		assert!(!root.path().join("evil.md").exists());
		assert!(dir.join("ok.md").is_file());
	}

	#[test]
	fn overwrites_existing_pages() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("git.md"), "old").unwrap();

		extract(&archive(&[("git.md", "new")]), dir.path()).unwrap();

		assert_eq!(fs::read_to_string(dir.path().join("git.md")).unwrap(), "new");
	}

	#[test]
	fn garbage_is_an_archive_error() {
		let dir = tempdir().unwrap();
		let err = extract(b"<html>404</html>", dir.path()).unwrap_err();
		assert!(matches!(err, UpdateError::Archive(_)));
	}

	#[test]
	fn writable_directory_needs_no_elevation() {
		let root = tempdir().unwrap();
		let dir = root.path().join("a/b");
		assert!(!requires_elevation(&dir).unwrap());
		assert!(dir.is_dir());
		assert_eq!(fs::read_dir(&dir).unwrap().count(), 0, "probe file is removed");
	}

	#[rstest]
	#[case(DEFAULT_ARCHIVE_URL)]
	#[case("http://localhost:8080/shortcuts.zip")]
	fn accepts_http_urls(#[case] url: &str) {
		assert!(validate_url(url).is_ok());
	}

	#[rstest]
	#[case("file:///etc/passwd")]
	#[case("ftp://example.com/shortcuts.zip")]
	#[case("not a url")]
	fn rejects_other_urls(#[case] url: &str) {
		assert!(matches!(validate_url(url), Err(UpdateError::InvalidUrl { .. })));
	}

	#[test]
	fn download_rejects_invalid_url_before_connecting() {
		let err = Updater::new("file:///tmp/x.zip").download().unwrap_err();
		assert!(matches!(err, UpdateError::InvalidUrl { .. }));
	}
}
