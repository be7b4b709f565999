use std::path::PathBuf;

use cmdbridge::RegistryError;
use cmdbridge_protocol::TreeError;
use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("failed to read {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid token tree: {0}")]
	Tree(#[from] TreeError),

	#[error("token tree has no command name")]
	MissingCommandName,

	#[error("invalid config {}: {message}", path.display())]
	Config { path: PathBuf, message: String },

	#[error(transparent)]
	Registry(#[from] RegistryError),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl CliError {
	/// Structured form for the result envelope.
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			CliError::Read { path, source } => (
				ErrorCode::IoError,
				format!("Failed to read {}: {source}", path.display()),
				Some(serde_json::json!({ "path": path })),
			),
			CliError::Tree(err) => (
				ErrorCode::InvalidTree,
				format!("Invalid token tree: {err}"),
				None,
			),
			CliError::MissingCommandName => (
				ErrorCode::InvalidTree,
				"Token tree has no command name".to_string(),
				None,
			),
			CliError::Config { path, message } => (
				ErrorCode::ConfigError,
				format!("Invalid config {}: {message}", path.display()),
				Some(serde_json::json!({ "path": path })),
			),
			CliError::Registry(err) => (ErrorCode::ConfigError, err.to_string(), None),
			CliError::Io(err) => (ErrorCode::IoError, err.to_string(), None),
			// Trees arrive as JSON; a parse failure is a bad tree.
			CliError::Json(err) => (
				ErrorCode::InvalidTree,
				format!("Malformed tree JSON: {err}"),
				None,
			),
			CliError::Anyhow(err) => (ErrorCode::InternalError, format!("{err:#}"), None),
		};

		CommandError {
			code,
			message,
			details,
		}
	}
}
