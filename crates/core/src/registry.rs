//! Command objects and name lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::sender::CommandSender;

/// An executable command.
pub trait Command {
	/// Primary name, matched case-insensitively.
	fn name(&self) -> &str;

	fn description(&self) -> &str {
		""
	}

	/// Usage line shown by help listings; defaults to `/<name>`.
	fn usage(&self) -> String {
		format!("/{}", self.name())
	}

	fn aliases(&self) -> &[&str] {
		&[]
	}

	/// Runs the command as `sender`.
	///
	/// Returns `false` on failure; the command reports its own errors through
	/// the sender before returning.
	fn execute(&self, sender: &dyn CommandSender, args: &[String]) -> bool;
}

/// Name lookup used by the dispatcher.
pub trait CommandRegistry {
	fn lookup(&self, name: &str) -> Option<&dyn Command>;
}

/// Registry keyed by lowercase name and alias, keeping registration order.
#[derive(Default)]
pub struct CommandMap {
	commands: Vec<Box<dyn Command>>,
	index: HashMap<String, usize>,
}

impl CommandMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a command under its name and every alias.
	///
	/// Fails without registering anything if any of those names is taken.
	pub fn register(&mut self, command: impl Command + 'static) -> Result<()> {
		let primary = command.name().to_lowercase();
		if primary.is_empty() {
			return Err(RegistryError::EmptyName);
		}

		let mut keys = vec![primary];
		for alias in command.aliases() {
			let alias = alias.to_lowercase();
			if !alias.is_empty() && !keys.contains(&alias) {
				keys.push(alias);
			}
		}
		if let Some(taken) = keys.iter().find(|key| self.index.contains_key(*key)) {
			return Err(RegistryError::Duplicate { name: taken.clone() });
		}

		let slot = self.commands.len();
		debug!(command = %keys[0], aliases = keys.len() - 1, "registered command");
		for key in keys {
			self.index.insert(key, slot);
		}
		self.commands.push(Box::new(command));
		Ok(())
	}

	/// Points `alias` at an already registered command.
	pub fn add_alias(&mut self, alias: &str, target: &str) -> Result<()> {
		let alias = alias.trim().to_lowercase();
		if alias.is_empty() {
			return Err(RegistryError::EmptyName);
		}
		let Some(&slot) = self.index.get(&target.trim().to_lowercase()) else {
			return Err(RegistryError::UnknownTarget {
				alias,
				target: target.to_owned(),
			});
		};
		if self.index.contains_key(&alias) {
			return Err(RegistryError::Duplicate { name: alias });
		}
		self.index.insert(alias, slot);
		Ok(())
	}

	/// Registered commands in registration order, once each.
	pub fn commands(&self) -> impl Iterator<Item = &(dyn Command + 'static)> {
		self.commands.iter().map(Box::as_ref)
	}

	/// Every name and alias resolving to `command_name`, sorted.
	pub fn names_for(&self, command_name: &str) -> Vec<&str> {
		let Some(&slot) = self.index.get(&command_name.to_lowercase()) else {
			return Vec::new();
		};
		let mut names: Vec<&str> = self
			.index
			.iter()
			.filter(|(_, s)| **s == slot)
			.map(|(name, _)| name.as_str())
			.collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

impl CommandRegistry for CommandMap {
	fn lookup(&self, name: &str) -> Option<&dyn Command> {
		self.index
			.get(&name.to_lowercase())
			.map(|&slot| self.commands[slot].as_ref())
	}
}
