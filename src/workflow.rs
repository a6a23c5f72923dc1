use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};
use shortcut::{PageError, PageStore, RenderError, Renderer, Updater, render_path};
use tracing::{debug, warn};

use crate::cli::{OutputFormat, print_page_list};
use crate::settings::ResolvedConfig;

/// Carries out the actions requested on the command line against one page
/// store.
pub(crate) struct PageWorkflow {
	store: PageStore,
	renderer: Renderer,
	updater: Updater,
}

impl PageWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let store = config.page_store();
		let updater = Updater::new(config.archive_url);
		let renderer = Renderer::new(config.render);
		Self {
			store,
			renderer,
			updater,
		}
	}

	/// Replace the store contents with the published archive.
	pub(crate) fn update(&self) -> Result<()> {
		let summary = self
			.updater
			.run(self.store.dir())
			.with_context(|| format!("failed to update pages from {}", self.updater.url()))?;
		debug!(files = summary.files, dir = %summary.dir.display(), "update finished");
		println!("Successfully updated cache");
		Ok(())
	}

	/// Print the names of all stored pages.
	pub(crate) fn list(&self, format: OutputFormat) -> Result<()> {
		let names = self.store.list()?;
		print_page_list(&names, format)
	}

	/// Render the page for `name` to stdout.
	pub(crate) fn show(&self, name: &str) -> Result<()> {
		let stdout = io::stdout();
		let mut sink = stdout.lock();
		self.show_to(name, &mut sink)
	}

	fn show_to<W: Write>(&self, name: &str, sink: &mut W) -> Result<()> {
		let path = self.store.path_for(name)?;
		match render_path(&self.renderer, &path, sink) {
			Ok(report) => {
				debug!(lines = report.lines, page = name, "rendered page");
				Ok(())
			}
			// A reader such as `head` went away; what it took was delivered.
			Err(err) if err.is_broken_pipe() => Ok(()),
			Err(err) => Err(describe(err, name)),
		}
	}
}

fn describe(err: RenderError, name: &str) -> anyhow::Error {
	match err {
		RenderError::SourceUnavailable { source, .. } if source.kind() == ErrorKind::NotFound => {
			PageError::NotFound(name.to_string()).into()
		}
		other => {
			if let Some(lines) = other.lines_rendered() {
				warn!(lines, page = name, "page output is incomplete");
			}
			anyhow::Error::new(other).context(format!("failed to show page \"{name}\""))
		}
	}
}
