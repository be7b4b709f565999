//! Who a command was issued by.

use cmdbridge_protocol::PermissionLevel;

use crate::sender::CommandSender;

/// Identity of whatever issued a command: a player, the console, a command
/// block. The adapter only reads it.
pub trait CommandOrigin {
	/// Display name used in logs and by fallback senders.
	fn name(&self) -> &str;

	fn permission_level(&self) -> PermissionLevel;

	/// The live sender behind this origin, if it has one.
	fn native_sender(&self) -> Option<&dyn CommandSender> {
		None
	}
}

/// Plain [`CommandOrigin`] with an optional borrowed native sender.
#[derive(Clone)]
pub struct Origin<'s> {
	name: String,
	permission: PermissionLevel,
	sender: Option<&'s dyn CommandSender>,
}

impl<'s> Origin<'s> {
	/// Origin with no native sender; commands run through a fallback sender.
	pub fn new(name: impl Into<String>, permission: PermissionLevel) -> Self {
		Self {
			name: name.into(),
			permission,
			sender: None,
		}
	}

	/// Attaches the live sender commands should run as.
	pub fn with_sender(mut self, sender: &'s dyn CommandSender) -> Self {
		self.sender = Some(sender);
		self
	}
}

impl std::fmt::Debug for Origin<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Origin")
			.field("name", &self.name)
			.field("permission", &self.permission)
			.field("native", &self.sender.is_some())
			.finish()
	}
}

impl CommandOrigin for Origin<'_> {
	fn name(&self) -> &str {
		&self.name
	}

	fn permission_level(&self) -> PermissionLevel {
		self.permission
	}

	fn native_sender(&self) -> Option<&dyn CommandSender> {
		self.sender
	}
}
