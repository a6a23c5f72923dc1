use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ColourArg, OutputFormat, SpanCloseArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `shortcut` binary.
#[derive(Parser, Debug)]
#[command(
	name = "shortcut",
	version,
	long_version = long_version(),
	about = "A shortcut-pages client: show keyboard shortcuts for a program",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(value_name = "PROGRAM_NAME", help = "Program whose page to show")]
	pub(crate) program: Option<String>,
	#[arg(
		short = 'n',
		long = "no-colour",
		visible_alias = "no-color",
		conflicts_with = "colour",
		help = "Remove colour from the output (default: colour on terminals)"
	)]
	pub(crate) no_colour: bool,
	#[arg(
		long = "colour",
		visible_alias = "color",
		value_enum,
		value_name = "WHEN",
		help = "Choose when to colour output (default: auto)"
	)]
	pub(crate) colour: Option<ColourArg>,
	#[arg(
		short,
		long,
		help = "List all available shortcut pages in the cache (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(short, long, help = "Update the local cache (default: disabled)")]
	pub(crate) update: bool,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SHORTCUT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "pages-dir",
		value_name = "PATH",
		help = "Read and store pages in this directory (default: cache directory)"
	)]
	pub(crate) pages_dir: Option<PathBuf>,
	#[arg(
		long = "archive-url",
		value_name = "URL",
		help = "Download pages from this archive (default: latest shortcut-pages release)"
	)]
	pub(crate) archive_url: Option<String>,
	#[arg(
		long = "span-close",
		value_enum,
		help = "Colour used after a closing }} (default: description)"
	)]
	pub(crate) span_close: Option<SpanCloseArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Log more details to stderr, repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print --list")]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// Colour choice requested on the command line, if any.
	pub(crate) fn colour_choice(&self) -> Option<ColourArg> {
		if self.no_colour {
			Some(ColourArg::Never)
		} else {
			self.colour
		}
	}
}
