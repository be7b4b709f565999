use clap::Parser;
use cmdbridge_cli::cli::Cli;
use cmdbridge_cli::config::CliConfig;
use cmdbridge_cli::error::CliError;
use cmdbridge_cli::output::{self, OutputFormat, ResultBuilder};
use cmdbridge_cli::{commands, logging};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let config = match CliConfig::load(cli.config.as_deref()) {
		Ok(config) => config,
		Err(err) => {
			handle_error(err, cli.format.unwrap_or_default());
			std::process::exit(1);
		}
	};
	let format = cli.format.or(config.format).unwrap_or_default();

	match commands::dispatch(cli, &config, format) {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			handle_error(err, format);
			std::process::exit(1);
		}
	}
}

fn handle_error(err: CliError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	// Also emit the envelope on stdout with ok=false
	if format != OutputFormat::Text {
		let result: output::CommandResult<()> = ResultBuilder::new("unknown")
			.error(cmd_error.code, &cmd_error.message)
			.build();
		output::print_result(&result, format);
	}
}
