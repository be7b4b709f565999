//! CLI configuration file.
//!
//! Looked up at `--config <FILE>` when given, otherwise at
//! `$XDG_CONFIG_HOME/cmdbridge/config.json` (falling back to
//! `~/.config/cmdbridge/config.json`). A missing default file means defaults;
//! a missing explicit file is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cmdbridge_protocol::PermissionLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};
use crate::output::OutputFormat;

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
	pub schema: u32,
	pub origin: OriginConfig,
	/// Extra command aliases, alias -> registered command name.
	pub aliases: BTreeMap<String, String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub format: Option<OutputFormat>,
}

impl Default for CliConfig {
	fn default() -> Self {
		Self {
			schema: CONFIG_SCHEMA_VERSION,
			origin: OriginConfig::default(),
			aliases: BTreeMap::new(),
			format: None,
		}
	}
}

/// Who `exec` runs commands as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginConfig {
	pub name: String,
	pub permission: PermissionLevel,
	/// Attach the console as the origin's native sender.
	pub native: bool,
}

impl Default for OriginConfig {
	fn default() -> Self {
		Self {
			name: "Server".to_string(),
			permission: PermissionLevel::Owner,
			native: true,
		}
	}
}

/// `$XDG_CONFIG_HOME/cmdbridge/config.json`, or the `~/.config` equivalent.
pub fn default_path() -> PathBuf {
	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
		.unwrap_or_else(|| PathBuf::from("."));
	config_home.join("cmdbridge").join("config.json")
}

impl CliConfig {
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		let path = match explicit {
			Some(path) => path.to_path_buf(),
			None => {
				let path = default_path();
				if !path.exists() {
					debug!(path = %path.display(), "no config file, using defaults");
					return Ok(Self::default());
				}
				path
			}
		};
		Self::from_file(&path)
	}

	fn from_file(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path).map_err(|source| CliError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config: Self = serde_json::from_str(&content).map_err(|err| CliError::Config {
			path: path.to_path_buf(),
			message: err.to_string(),
		})?;
		if config.schema != CONFIG_SCHEMA_VERSION {
			return Err(CliError::Config {
				path: path.to_path_buf(),
				message: format!(
					"unsupported schema {} (expected {CONFIG_SCHEMA_VERSION})",
					config.schema
				),
			});
		}
		debug!(path = %path.display(), aliases = config.aliases.len(), "loaded config");
		Ok(config)
	}
}
