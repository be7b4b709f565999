//! cmdbridge: runs parsed command lines against registered commands.
//!
//! A grammar engine hands over a [`TokenTree`] for each command line. This
//! crate turns that tree back into the flat argument list a command expects,
//! picks a sender to run it as, and reports the result through an
//! [`OutputSink`].
//!
//! # Pipeline
//!
//! ```ignore
//! use cmdbridge::{CommandInvocation, CommandMap, CommandOutput, Dispatcher, Origin};
//!
//! let mut commands = CommandMap::new();
//! commands.register(SayCommand)?;
//!
//! let mut invocation = CommandInvocation::from_tree(&tree, tree_root).unwrap();
//! let origin = Origin::new("Server", PermissionLevel::Owner);
//! let mut output = CommandOutput::new();
//!
//! let outcome = Dispatcher::new(&commands).dispatch(&mut invocation, &origin, &mut output);
//! ```
//!
//! # Main Types
//!
//! - [`flatten_arguments`] - tree to argument list, without recursion
//! - [`CommandSender`] / [`FallbackSender`] - who a command runs as
//! - [`CommandRegistry`] / [`CommandMap`] - name to command lookup
//! - [`Dispatcher`] / [`CommandInvocation`] - one command execution

pub mod dispatch;
pub mod error;
pub mod flatten;
pub mod origin;
pub mod output;
pub mod registry;
pub mod sender;

#[cfg(test)]
pub(crate) mod testing;

pub use cmdbridge_protocol::{Message, NodeId, PermissionLevel, Symbol, TokenTree, TokenTreeBuilder, Translatable};
pub use dispatch::{CommandInvocation, DispatchOutcome, Dispatcher};
pub use error::{RegistryError, Result, SenderError};
pub use flatten::flatten_arguments;
pub use origin::{CommandOrigin, Origin};
pub use output::{CommandOutput, OutputRecord, OutputSink};
pub use registry::{Command, CommandMap, CommandRegistry};
pub use sender::{CommandSender, FallbackSender, ResolvedSender, resolve_sender};
