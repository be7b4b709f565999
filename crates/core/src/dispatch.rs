//! Runs one parsed command line against the registry.
//!
//! Each dispatch moves through the same steps:
//!
//! 1. resolve the command by name; an unknown name is logged for the operator
//!    and nothing reaches the output sink
//! 2. flatten the arguments, at most once per [`CommandInvocation`]
//! 3. pick the sender ([`resolve_sender`]) and execute the command
//! 4. on success, record it in the output sink; on failure the command has
//!    already reported through its sender


use cmdbridge_protocol::{NodeId, TokenTree};
use serde::Serialize;
use tracing::{debug, error};

use crate::flatten::flatten_arguments;
use crate::origin::CommandOrigin;
use crate::output::OutputSink;
use crate::registry::CommandRegistry;
use crate::sender::resolve_sender;

/// A command line waiting to be dispatched.
///
/// Holds the tree it came from and caches the flattened arguments, so
/// dispatching the same invocation again never walks the tree a second time.
#[derive(Debug, Clone)]
pub struct CommandInvocation<'t> {
	name: String,
	tree: &'t TokenTree,
	start: NodeId,
	arguments: Option<Vec<String>>,
}

impl<'t> CommandInvocation<'t> {
	/// Invocation of the command registered as `name`, with arguments taken
	/// from the tree containing `start`.
	pub fn new(name: impl Into<String>, tree: &'t TokenTree, start: NodeId) -> Self {
		Self {
			name: name.into(),
			tree,
			start,
			arguments: None,
		}
	}

	/// Invocation named after the tree's command-name node.
	///
	/// Returns `None` when the tree has no command-name node or its text is empty.
	pub fn from_tree(tree: &'t TokenTree, start: NodeId) -> Option<Self> {
		let root = tree.root_of(start);
		let command_name = tree.node(root).child()?;
		let name = tree.text(command_name);
		if name.is_empty() {
			return None;
		}
		Some(Self::new(name, tree, start))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Flattened arguments, computed on first use.
	pub fn arguments(&mut self) -> &[String] {
		let (tree, start) = (self.tree, self.start);
		self.arguments.get_or_insert_with(|| {
			let mut out = Vec::new();
			flatten_arguments(tree, start, &mut out);
			out
		})
	}

	pub fn is_flattened(&self) -> bool {
		self.arguments.is_some()
	}
}

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
	/// The command ran and reported success.
	Succeeded,
	/// The command ran and reported failure.
	Failed,
	/// No command is registered under the invocation's name.
	Unregistered,
}

impl DispatchOutcome {
	pub fn is_success(self) -> bool {
		self == DispatchOutcome::Succeeded
	}

	pub fn as_str(self) -> &'static str {
		match self {
			DispatchOutcome::Succeeded => "succeeded",
			DispatchOutcome::Failed => "failed",
			DispatchOutcome::Unregistered => "unregistered",
		}
	}
}

/// Executes invocations against a command registry.
///
/// The registry is borrowed from the surrounding server session for as long
/// as the dispatcher lives.
#[derive(Clone, Copy)]
pub struct Dispatcher<'r> {
	registry: &'r dyn CommandRegistry,
}

impl<'r> Dispatcher<'r> {
	pub fn new(registry: &'r dyn CommandRegistry) -> Self {
		Self { registry }
	}

	pub fn dispatch(
		&self,
		invocation: &mut CommandInvocation<'_>,
		origin: &dyn CommandOrigin,
		output: &mut dyn OutputSink,
	) -> DispatchOutcome {
		let Some(command) = self.registry.lookup(invocation.name()) else {
			error!(
				command = invocation.name(),
				origin = origin.name(),
				"An unregistered command '{}' was executed by {}.",
				invocation.name(),
				origin.name()
			);
			return DispatchOutcome::Unregistered;
		};

		let args = invocation.arguments();

		let success = {
			let sender = resolve_sender(origin, &mut *output);
			debug!(
				command = command.name(),
				args = args.len(),
				fallback = sender.is_fallback(),
				"executing command"
			);
			command.execute(sender.as_sender(), args)
		};

		if success {
			output.record_success();
			DispatchOutcome::Succeeded
		} else {
			debug!(command = command.name(), "command reported failure");
			DispatchOutcome::Failed
		}
	}
}
