//! Error types for token tree validation.

use thiserror::Error;

use crate::tree::NodeId;

/// Structural problems found by [`TokenTree::validate`](crate::TokenTree::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
	/// The arena holds no nodes at all.
	#[error("token tree has no nodes")]
	Empty,

	/// Exactly one node may lack a parent.
	#[error("token tree must have exactly one root, found {count}")]
	RootCount { count: usize },

	/// The root node links to a sibling.
	#[error("root node {node} has a sibling link")]
	RootHasSibling { node: NodeId },

	/// A child, next or parent link points outside the arena.
	#[error("node {node} links to {target}, which is not in the tree")]
	DanglingLink { node: NodeId, target: NodeId },

	/// A node's text span does not lie on character boundaries of the source.
	#[error("node {node} has span {start}..{end} outside the source text")]
	SpanOutOfBounds { node: NodeId, start: u32, end: u32 },

	/// A node reached through a child chain names a different parent.
	#[error("node {node} is a child of {expected} but names another parent")]
	ParentMismatch { node: NodeId, expected: NodeId },

	/// A node was reached twice while walking child and sibling links.
	#[error("node {node} is reachable more than once")]
	Cycle { node: NodeId },

	/// A node cannot be reached from the root.
	#[error("node {node} is not reachable from the root")]
	Unreachable { node: NodeId },
}
