//! Data types shared between command producers and the dispatch adapter.
//!
//! This crate holds the pure-data side of command execution:
//! - [`TokenTree`]: the arena-owned parse tree a grammar engine produces for
//!   one command line
//! - [`Message`] / [`Translatable`]: what senders are asked to display
//! - [`PermissionLevel`]: the privilege tier of whoever issued a command
//!
//! Types here carry no dispatch behavior. The adapter itself lives in the
//! `cmdbridge` crate.

pub mod error;
pub mod message;
pub mod permission;
pub mod tree;

pub use error::TreeError;
pub use message::*;
pub use permission::*;
pub use tree::*;
