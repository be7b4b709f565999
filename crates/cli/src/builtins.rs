//! Commands every `cmdbridge` registry starts with.

use std::collections::BTreeMap;

use cmdbridge::{Command, CommandMap, CommandSender, Message, Translatable};

use crate::error::Result;

fn send(sender: &dyn CommandSender, key: &str, params: Vec<String>) {
	sender.send_message(&Message::from(Translatable::new(key, params)));
}

fn fail(sender: &dyn CommandSender, key: &str, params: Vec<String>) -> bool {
	sender.send_error_message(&Message::from(Translatable::new(key, params)));
	false
}

/// `say <message...>`: announces the joined arguments as the sender.
pub struct Say;

impl Command for Say {
	fn name(&self) -> &str {
		"say"
	}

	fn description(&self) -> &str {
		"Broadcast a message as the sender"
	}

	fn usage(&self) -> String {
		"/say <message...>".to_string()
	}

	fn execute(&self, sender: &dyn CommandSender, args: &[String]) -> bool {
		if args.is_empty() {
			return fail(sender, "commands.generic.usage", vec![self.usage()]);
		}
		send(
			sender,
			"chat.type.announcement",
			vec![sender.name().to_string(), args.join(" ")],
		);
		true
	}
}

/// `op <target>` and `deop <target>`.
///
/// There is no player list behind the CLI, so the status change applies to
/// the sender the command runs as; `target` only names it in the reply.
pub struct SetOperator {
	grant: bool,
}

impl SetOperator {
	pub fn op() -> Self {
		Self { grant: true }
	}

	pub fn deop() -> Self {
		Self { grant: false }
	}

	fn key(&self, suffix: &str) -> String {
		format!("commands.{}.{suffix}", self.name())
	}
}

impl Command for SetOperator {
	fn name(&self) -> &str {
		if self.grant { "op" } else { "deop" }
	}

	fn description(&self) -> &str {
		if self.grant {
			"Grant operator status"
		} else {
			"Revoke operator status"
		}
	}

	fn usage(&self) -> String {
		format!("/{} <target>", self.name())
	}

	fn execute(&self, sender: &dyn CommandSender, args: &[String]) -> bool {
		let [target] = args else {
			return fail(sender, "commands.generic.usage", vec![self.usage()]);
		};
		match sender.set_op(self.grant) {
			Ok(()) => {
				send(sender, &self.key("success"), vec![target.clone()]);
				true
			}
			Err(_) => fail(sender, &self.key("failed"), vec![target.clone()]),
		}
	}
}

/// `version`: reports the running cmdbridge version.
pub struct Version;

impl Command for Version {
	fn name(&self) -> &str {
		"version"
	}

	fn description(&self) -> &str {
		"Show the cmdbridge version"
	}

	fn aliases(&self) -> &[&str] {
		&["ver"]
	}

	fn execute(&self, sender: &dyn CommandSender, _args: &[String]) -> bool {
		send(
			sender,
			"commands.version",
			vec![env!("CARGO_PKG_VERSION").to_string()],
		);
		true
	}
}

/// Registry with the built-in commands plus configured aliases.
pub fn command_map(aliases: &BTreeMap<String, String>) -> Result<CommandMap> {
	let mut commands = CommandMap::new();
	commands.register(Say)?;
	commands.register(SetOperator::op())?;
	commands.register(SetOperator::deop())?;
	commands.register(Version)?;
	for (alias, target) in aliases {
		commands.add_alias(alias, target)?;
	}
	Ok(commands)
}
