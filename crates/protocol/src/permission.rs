//! Permission tiers attached to a command origin.

use serde::{Deserialize, Serialize};

/// Privilege tier of whoever issued a command, lowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
	/// Regular players; no elevated commands.
	#[default]
	Any,
	/// Game directors and operators.
	Operator,
	Admin,
	Host,
	Owner,
	/// Engine-internal callers.
	Internal,
}

impl PermissionLevel {
	pub const ALL: [PermissionLevel; 6] = [
		PermissionLevel::Any,
		PermissionLevel::Operator,
		PermissionLevel::Admin,
		PermissionLevel::Host,
		PermissionLevel::Owner,
		PermissionLevel::Internal,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			PermissionLevel::Any => "any",
			PermissionLevel::Operator => "operator",
			PermissionLevel::Admin => "admin",
			PermissionLevel::Host => "host",
			PermissionLevel::Owner => "owner",
			PermissionLevel::Internal => "internal",
		}
	}
}

impl std::str::FromStr for PermissionLevel {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lower = s.to_lowercase();
		PermissionLevel::ALL
			.into_iter()
			.find(|level| level.as_str() == lower)
			.ok_or_else(|| format!("unknown permission level: {s}"))
	}
}

impl std::fmt::Display for PermissionLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_is_case_insensitive() {
		assert_eq!("Operator".parse::<PermissionLevel>().unwrap(), PermissionLevel::Operator);
		assert_eq!("any".parse::<PermissionLevel>().unwrap(), PermissionLevel::Any);
		assert!("root".parse::<PermissionLevel>().is_err());
	}

	#[test]
	fn levels_are_ordered() {
		assert!(PermissionLevel::Any < PermissionLevel::Operator);
		assert!(PermissionLevel::Owner < PermissionLevel::Internal);
	}

	#[test]
	fn serde_uses_lowercase_names() {
		assert_eq!(serde_json::to_string(&PermissionLevel::Admin).unwrap(), "\"admin\"");
		let level: PermissionLevel = serde_json::from_str("\"host\"").unwrap();
		assert_eq!(level, PermissionLevel::Host);
	}
}
