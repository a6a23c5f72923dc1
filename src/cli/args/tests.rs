use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::ColourArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["shortcut"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.program, None);
	assert_eq!(parsed.colour_choice(), None);
}

#[test]
fn legacy_flags_are_supported() {
	let cli = CliArgs::parse_from(["shortcut", "-n", "-u", "-l", "git"]);
	assert!(cli.update);
	assert!(cli.list);
	assert_eq!(cli.program.as_deref(), Some("git"));
	assert_eq!(cli.colour_choice(), Some(ColourArg::Never));
}

#[test]
fn american_spelling_is_an_alias() {
	let cli = CliArgs::parse_from(["shortcut", "--no-color", "vim"]);
	assert!(cli.no_colour);
	let cli = CliArgs::parse_from(["shortcut", "--color", "always", "vim"]);
	assert_eq!(cli.colour_choice(), Some(ColourArg::Always));
}

#[test]
fn no_colour_conflicts_with_explicit_choice() {
	let result = CliArgs::try_parse_from(["shortcut", "-n", "--colour", "always"]);
	assert!(result.is_err());
}

#[test]
fn verbosity_counts() {
	let cli = CliArgs::parse_from(["shortcut", "-vv"]);
	assert_eq!(cli.verbose, 2);
}
