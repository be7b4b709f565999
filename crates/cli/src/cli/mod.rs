
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cmdbridge_protocol::PermissionLevel;

use crate::output::OutputFormat;
use crate::styles::cli_styles;

/// Root CLI for cmdbridge.
#[derive(Parser, Debug)]
#[command(name = "cmdbridge")]
#[command(about = "Dispatch serialized command trees against a command registry")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: json (default), ndjson, or text
	#[arg(short = 'f', long, global = true, value_enum)]
	pub format: Option<OutputFormat>,

	/// Config file (default: $XDG_CONFIG_HOME/cmdbridge/config.json)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Dispatch the command line held in a token tree.
	Exec(ExecArgs),
	/// Print the arguments a token tree flattens to.
	Flatten(TreeArgs),
	/// List registered commands.
	List,
}

#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
	/// Token tree JSON file, or `-` for stdin.
	#[arg(long, value_name = "FILE")]
	pub tree: PathBuf,
}

impl TreeArgs {
	pub fn is_stdin(&self) -> bool {
		self.tree.as_os_str() == "-"
	}
}

#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
	#[command(flatten)]
	pub tree: TreeArgs,

	/// Name the command runs as (overrides config).
	#[arg(long, value_name = "NAME")]
	pub origin_name: Option<String>,

	/// Permission level of the origin (overrides config).
	#[arg(long, value_name = "LEVEL")]
	pub permission: Option<PermissionLevel>,

	/// Run without a native sender; output goes through the fallback.
	#[arg(long)]
	pub no_native: bool,
}
