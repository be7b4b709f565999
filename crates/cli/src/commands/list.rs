//! `list`: registered commands and their aliases.

use crate::builtins;
use crate::config::CliConfig;
use crate::error::Result;
use crate::output::{CommandEntry, OutputFormat, ResultBuilder, print_result};

pub fn execute(config: &CliConfig, format: OutputFormat) -> Result<bool> {
	let builder = ResultBuilder::new("list");
	let commands = builtins::command_map(&config.aliases)?;

	let entries: Vec<CommandEntry> = commands
		.commands()
		.map(|command| {
			let primary = command.name().to_lowercase();
			CommandEntry {
				name: command.name().to_string(),
				usage: command.usage(),
				description: command.description().to_string(),
				aliases: commands
					.names_for(&primary)
					.into_iter()
					.filter(|name| *name != primary)
					.map(str::to_string)
					.collect(),
			}
		})
		.collect();

	print_result(&builder.data(entries).build(), format);
	Ok(true)
}
