mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli, print_help};
use shortcut::logging;
use workflow::PageWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run(&cli, PageWorkflow::from_config(resolved))
}

/// Update first, then list or show. Help is printed only when nothing else
/// was requested.
fn run(cli: &CliArgs, workflow: PageWorkflow) -> Result<()> {
	let mut acted = cli.print_config;

	if cli.update {
		workflow.update()?;
		acted = true;
	}

	if cli.list {
		workflow.list(cli.output)?;
	} else if let Some(program) = cli.program.as_deref() {
		workflow.show(program)?;
	} else if !acted {
		print_help()?;
	}

	Ok(())
}
