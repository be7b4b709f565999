//! Structured output envelope for CLI results.
//!
//! Every subcommand prints one result envelope on stdout:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "ok": true,
//!   "command": "exec",
//!   "data": { ... },
//!   "timings": { "durationMs": 0 }
//! }
//! ```
//!
//! On failure `data` is replaced by an `error` object with a stable code.


use std::io::{self, Write};
use std::time::{Duration, Instant};

use cmdbridge::OutputRecord;
use serde::{Deserialize, Serialize};

/// Current schema version for command output.
///
/// Increment this when making breaking changes to the envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// Pretty-printed JSON (default)
	#[default]
	Json,
	/// Single-line JSON
	Ndjson,
	/// Human-readable text
	Text,
}

impl std::str::FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"json" => Ok(OutputFormat::Json),
			"ndjson" => Ok(OutputFormat::Ndjson),
			"text" => Ok(OutputFormat::Text),
			_ => Err(format!("unknown format: {s}")),
		}
	}
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Ndjson => write!(f, "ndjson"),
			OutputFormat::Text => write!(f, "text"),
		}
	}
}

/// The result envelope printed by every subcommand.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub schema_version: Option<u32>,

	pub ok: bool,

	/// Subcommand name ("exec", "flatten", "list")
	pub command: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,
}

/// Error information for failed runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,

	pub message: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Token tree could not be read or failed validation
	InvalidTree,
	/// Config file could not be read or parsed
	ConfigError,
	/// No command registered under the requested name
	UnknownCommand,
	/// The command ran and reported failure
	CommandFailed,
	/// File I/O error
	IoError,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::InvalidTree => write!(f, "INVALID_TREE"),
			ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
			ErrorCode::UnknownCommand => write!(f, "UNKNOWN_COMMAND"),
			ErrorCode::CommandFailed => write!(f, "COMMAND_FAILED"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

/// Data for `exec`: what was dispatched and everything it reported.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecData {
	/// Command name as typed.
	pub name: String,
	pub args: Vec<String>,
	pub outcome: String,
	/// Records written to the invocation's output sink.
	pub records: Vec<OutputRecord>,
	/// Messages delivered to the console sender, when one was attached.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub console: Vec<OutputRecord>,
}

/// Data for `flatten`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenData {
	pub name: Option<String>,
	pub args: Vec<String>,
}

/// One entry of `list`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
	pub name: String,
	pub usage: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub aliases: Vec<String>,
}

/// Builder for [`CommandResult`].
pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
		}
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: None,
		});
		self
	}

	pub fn build(self) -> CommandResult<T> {
		CommandResult {
			schema_version: Some(SCHEMA_VERSION),
			ok: self.error.is_none(),
			command: self.command,
			data: self.data,
			error: self.error,
			timings: Some(self.start_time.elapsed().into()),
		}
	}
}

/// Print a command result in the given format
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Ndjson => {
			if let Ok(json) = serde_json::to_string(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => {
			let mut stdout = io::stdout().lock();
			let _ = write_result_text(&mut stdout, result);
		}
	}
}

/// Human-readable rendering; objects become `key: value` lines.
fn write_result_text<T: Serialize>(out: &mut impl Write, result: &CommandResult<T>) -> io::Result<()> {
	if let Some(ref error) = result.error {
		writeln!(out, "Error [{}]: {}", error.code, error.message)?;
	}
	let Some(ref data) = result.data else {
		return Ok(());
	};
	match serde_json::to_value(data) {
		Ok(serde_json::Value::Object(fields)) => {
			for (key, value) in fields {
				writeln!(out, "{key}: {}", text_value(&value))?;
			}
		}
		Ok(serde_json::Value::Array(items)) => {
			for item in items {
				writeln!(out, "{}", text_value(&item))?;
			}
		}
		Ok(other) => writeln!(out, "{}", text_value(&other))?,
		Err(_) => {}
	}
	Ok(())
}

fn text_value(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Print error message to stderr
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}
