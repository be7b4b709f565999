//! Error types for the dispatch adapter.

use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors a sender reports back to the command that called it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SenderError {
	/// The sender cannot change its operator status.
	#[error("changing the operator status of {name} is not supported")]
	MutationRejected { name: String },
}

/// Errors raised while populating a [`CommandMap`](crate::CommandMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	#[error("command name must not be empty")]
	EmptyName,

	/// The name or alias already resolves to another command.
	#[error("'{name}' is already registered")]
	Duplicate { name: String },

	/// An alias was added for a command that is not registered.
	#[error("cannot alias '{alias}' to unknown command '{target}'")]
	UnknownTarget { alias: String, target: String },
}
