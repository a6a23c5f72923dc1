mod definitions;
mod options;
mod styles;

use clap::{CommandFactory, Parser};

pub(crate) use definitions::CliArgs;
pub(crate) use options::OutputFormat;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Print the generated help text to stdout.
pub(crate) fn print_help() -> std::io::Result<()> {
	CliArgs::command().print_help()
}

#[cfg(test)]
mod tests;
