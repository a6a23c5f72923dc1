use std::io::{self, Write};

use anyhow::Result;

use super::OutputFormat;

/// Format page names for `--list`.
pub(crate) fn format_page_list(names: &[String], format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok(names.iter().map(|name| format!("{name}\n")).collect()),
		OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(names)?)),
	}
}

/// Print page names, or a hint on stderr when the cache is empty.
pub(crate) fn print_page_list(names: &[String], format: OutputFormat) -> Result<()> {
	if names.is_empty() {
		eprintln!("Shortcut pages directory is empty, please run shortcut --update");
	}

	let mut stdout = io::stdout().lock();
	stdout.write_all(format_page_list(names, format)?.as_bytes())?;
	stdout.flush()?;
	Ok(())
}
