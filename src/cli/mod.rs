mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli, print_help};
pub(crate) use output::print_page_list;
