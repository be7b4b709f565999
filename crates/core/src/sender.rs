//! Sender contract and sender selection.
//!
//! A command always runs "as" someone. When the origin has a live sender (a
//! connected player, the console) the command gets that sender directly.
//! Otherwise a [`FallbackSender`] stands in for it and routes everything the
//! command says into the invocation's [`OutputSink`].

use std::cell::RefCell;

use cmdbridge_protocol::{Message, PermissionLevel};
use tracing::error;

use crate::error::SenderError;
use crate::origin::CommandOrigin;
use crate::output::OutputSink;

/// Capabilities a command may use on whoever it runs as.
pub trait CommandSender {
	fn send_message(&self, message: &Message);

	fn send_error_message(&self, message: &Message);

	fn name(&self) -> &str;

	/// Whether the sender has operator status.
	fn is_op(&self) -> bool;

	/// Grants or revokes operator status.
	fn set_op(&self, value: bool) -> Result<(), SenderError>;
}

/// Stand-in sender for origins without a native one.
///
/// Borrows the origin and the output sink for one dispatch and must not
/// outlive it.
pub struct FallbackSender<'a> {
	origin: &'a dyn CommandOrigin,
	output: RefCell<&'a mut dyn OutputSink>,
}

impl<'a> FallbackSender<'a> {
	pub fn new(origin: &'a dyn CommandOrigin, output: &'a mut dyn OutputSink) -> Self {
		Self {
			origin,
			output: RefCell::new(output),
		}
	}
}

impl CommandSender for FallbackSender<'_> {
	fn send_message(&self, message: &Message) {
		let (key, params) = message.to_translatable().into_parts();
		self.output.borrow_mut().record_message(&key, params);
	}

	fn send_error_message(&self, message: &Message) {
		let (key, params) = message.to_translatable().into_parts();
		self.output.borrow_mut().record_error(&key, params);
	}

	fn name(&self) -> &str {
		self.origin.name()
	}

	/// Derived from the origin's level: everything above `Any` counts.
	fn is_op(&self) -> bool {
		!matches!(self.origin.permission_level(), PermissionLevel::Any)
	}

	fn set_op(&self, value: bool) -> Result<(), SenderError> {
		let name = self.name();
		error!(target_name = name, requested = value, "Changing the operator status of {name} is not supported.");
		Err(SenderError::MutationRejected { name: name.to_owned() })
	}
}

/// The sender a dispatch runs as.
pub enum ResolvedSender<'a> {
	/// Borrowed from the origin.
	Native(&'a dyn CommandSender),
	/// Built for this dispatch only.
	Fallback(FallbackSender<'a>),
}

impl ResolvedSender<'_> {
	pub fn as_sender(&self) -> &dyn CommandSender {
		match self {
			ResolvedSender::Native(sender) => *sender,
			ResolvedSender::Fallback(sender) => sender,
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self, ResolvedSender::Fallback(_))
	}
}

/// Returns the origin's native sender, or a fallback bound to `output`.
pub fn resolve_sender<'a>(origin: &'a dyn CommandOrigin, output: &'a mut dyn OutputSink) -> ResolvedSender<'a> {
	match origin.native_sender() {
		Some(sender) => ResolvedSender::Native(sender),
		None => ResolvedSender::Fallback(FallbackSender::new(origin, output)),
	}
}

#[cfg(test)]
mod tests {
	use cmdbridge_protocol::Translatable;

	use super::*;
	use crate::origin::Origin;
	use crate::output::{CommandOutput, OutputRecord};
	use crate::testing::{NativeSender, capture_logs};

	#[test]
	fn fallback_is_op_for_every_level_but_any() {
		for level in PermissionLevel::ALL {
			let origin = Origin::new("CommandBlock", level);
			let mut output = CommandOutput::new();
			let sender = FallbackSender::new(&origin, &mut output);
			assert_eq!(sender.is_op(), level != PermissionLevel::Any, "{level}");
		}
	}

	#[test]
	fn fallback_name_comes_from_origin() {
		let origin = Origin::new("@", PermissionLevel::Operator);
		let mut output = CommandOutput::new();
		let sender = FallbackSender::new(&origin, &mut output);
		assert_eq!(sender.name(), "@");
	}

	#[test]
	fn fallback_forwards_messages_to_output() {
		let origin = Origin::new("CommandBlock", PermissionLevel::Operator);
		let mut output = CommandOutput::new();
		{
			let sender = FallbackSender::new(&origin, &mut output);
			sender.send_message(&Message::from("plain text"));
			sender.send_error_message(&Message::from(Translatable::new(
				"commands.generic.noTargetMatch",
				vec!["@p".into()],
			)));
		}

		assert_eq!(
			output.records(),
			[
				OutputRecord::Message {
					key: "plain text".into(),
					params: vec![],
				},
				OutputRecord::Error {
					key: "commands.generic.noTargetMatch".into(),
					params: vec!["@p".into()],
				},
			]
		);
	}

	#[test]
	fn fallback_rejects_set_op_and_keeps_state() {
		for level in [PermissionLevel::Any, PermissionLevel::Operator] {
			let origin = Origin::new("CommandBlock", level);
			let mut output = CommandOutput::new();
			let sender = FallbackSender::new(&origin, &mut output);
			let before = sender.is_op();

			let (result, logs) = capture_logs(|| sender.set_op(!before));

			assert_eq!(
				result,
				Err(SenderError::MutationRejected {
					name: "CommandBlock".into()
				})
			);
			assert_eq!(sender.is_op(), before);
			assert!(logs.contains("Changing the operator status of CommandBlock is not supported."));
		}
	}

	#[test]
	fn set_op_leaves_output_untouched() {
		let origin = Origin::new("CommandBlock", PermissionLevel::Operator);
		let mut output = CommandOutput::new();
		{
			let sender = FallbackSender::new(&origin, &mut output);
			let _ = sender.set_op(true);
		}
		assert!(output.is_empty());
	}

	#[test]
	fn native_sender_is_borrowed_unchanged() {
		let native = NativeSender::new("Steve", false);
		let origin = Origin::new("Steve", PermissionLevel::Any).with_sender(&native);
		let mut output = CommandOutput::new();

		let resolved = resolve_sender(&origin, &mut output);
		assert!(!resolved.is_fallback());
		resolved.as_sender().send_message(&Message::from("hi"));
		drop(resolved);

		assert_eq!(native.messages(), ["hi"]);
		assert!(output.is_empty());
	}

	#[test]
	fn missing_native_sender_resolves_to_fallback() {
		let origin = Origin::new("CommandBlock", PermissionLevel::Operator);
		let mut output = CommandOutput::new();

		let resolved = resolve_sender(&origin, &mut output);
		assert!(resolved.is_fallback());
		assert_eq!(resolved.as_sender().name(), "CommandBlock");
		resolved.as_sender().send_message(&Message::from("routed"));
		drop(resolved);

		assert_eq!(output.records().len(), 1);
	}
}
