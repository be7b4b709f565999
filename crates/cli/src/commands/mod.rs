//! Subcommand handlers.

mod exec;
mod flatten;
mod list;

use std::fs;
use std::io::Read;

use anyhow::Context;
use cmdbridge_protocol::TokenTree;
use tracing::debug;

use crate::cli::{Cli, Commands, TreeArgs};
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;

/// Runs the parsed subcommand.
///
/// `Ok(false)` means the result was printed but the run did not succeed.
pub fn dispatch(cli: Cli, config: &CliConfig, format: OutputFormat) -> Result<bool> {
	match cli.command {
		Commands::Exec(args) => exec::execute(&args, config, format),
		Commands::Flatten(args) => flatten::execute(&args, format),
		Commands::List => list::execute(config, format),
	}
}

/// Reads and validates the token tree named by `--tree`.
pub(crate) fn load_tree(args: &TreeArgs) -> Result<TokenTree> {
	let content = if args.is_stdin() {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.context("reading token tree from stdin")?;
		buf
	} else {
		fs::read_to_string(&args.tree).map_err(|source| CliError::Read {
			path: args.tree.clone(),
			source,
		})?
	};

	let tree: TokenTree = serde_json::from_str(&content)?;
	tree.validate()?;
	debug!(nodes = tree.len(), "loaded token tree");
	Ok(tree)
}
