//! `exec`: dispatch one token tree.

use cmdbridge::{CommandInvocation, CommandOutput, DispatchOutcome, Dispatcher, Origin, PermissionLevel};
use tracing::info;

use super::load_tree;
use crate::builtins;
use crate::cli::ExecArgs;
use crate::config::CliConfig;
use crate::console::ConsoleSender;
use crate::error::{CliError, Result};
use crate::output::{ErrorCode, ExecData, OutputFormat, ResultBuilder, print_result};

pub fn execute(args: &ExecArgs, config: &CliConfig, format: OutputFormat) -> Result<bool> {
	let builder = ResultBuilder::new("exec");
	let tree = load_tree(&args.tree)?;
	let commands = builtins::command_map(&config.aliases)?;

	let root = tree.root_of(cmdbridge::NodeId::new(0));
	let mut invocation = CommandInvocation::from_tree(&tree, root).ok_or(CliError::MissingCommandName)?;

	let name = args.origin_name.clone().unwrap_or_else(|| config.origin.name.clone());
	let permission = args.permission.unwrap_or(config.origin.permission);
	let native = config.origin.native && !args.no_native;

	let console = ConsoleSender::new(name.clone(), permission >= PermissionLevel::Operator);
	let mut origin = Origin::new(name, permission);
	if native {
		origin = origin.with_sender(&console);
	}

	let mut output = CommandOutput::new();
	let outcome = Dispatcher::new(&commands).dispatch(&mut invocation, &origin, &mut output);
	info!(command = invocation.name(), outcome = outcome.as_str(), native, "dispatched");

	let data = ExecData {
		name: invocation.name().to_string(),
		args: if invocation.is_flattened() {
			invocation.arguments().to_vec()
		} else {
			Vec::new()
		},
		outcome: outcome.as_str().to_string(),
		records: output.into_records(),
		console: console.take_lines(),
	};

	let builder = builder.data(data);
	let result = match outcome {
		DispatchOutcome::Succeeded => builder.build(),
		DispatchOutcome::Failed => builder
			.error(
				ErrorCode::CommandFailed,
				format!("Command '{}' failed", invocation.name()),
			)
			.build(),
		DispatchOutcome::Unregistered => builder
			.error(
				ErrorCode::UnknownCommand,
				format!("Unknown command: {}", invocation.name()),
			)
			.build(),
	};

	print_result(&result, format);
	Ok(outcome.is_success())
}
