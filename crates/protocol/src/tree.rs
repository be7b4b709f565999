//! Arena-owned parse tree for a single command line.
//!
//! A grammar engine turns one command line into a [`TokenTree`]: every
//! fragment is a [`TokenNode`] stored in one `Vec`, and the `child`, `next`
//! and `parent` relations are [`NodeId`] indices into that arena. Nodes are
//! never owned individually, so the whole tree is dropped in one go once the
//! command has been dispatched.
//!
//! Node text is a byte span into the tree's `source` string. A zero-length
//! span means the node carries no literal text (punctuation-only or purely
//! structural grammar nodes).
//!
//! ## Wire format
//!
//! Trees serialize as a flat arena:
//!
//! ```json
//! {
//!   "source": "say hi",
//!   "nodes": [
//!     { "symbol": 0, "span": [0, 0], "parent": null, "child": 1, "next": null },
//!     { "symbol": 1, "span": [0, 3], "parent": 0, "child": null, "next": 2 },
//!     { "symbol": 3, "span": [4, 6], "parent": 0, "child": null, "next": null }
//!   ]
//! }
//! ```
//!
//! Deserialized trees come from outside the process and must pass
//! [`TokenTree::validate`] before being walked.

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Index of a node inside its [`TokenTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
	pub const fn new(index: u32) -> Self {
		Self(index)
	}

	pub fn index(self) -> usize {
		self.0 as usize
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Grammar category of a node.
///
/// The producer's grammar defines the numeric values; the named constants are
/// the categories the adapter cares about. Any other value is accepted and
/// treated as an opaque category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(u32);

impl Symbol {
	/// The synthetic root that parents the whole command line.
	pub const ROOT: Symbol = Symbol(0);
	/// The command name, always the root's first child.
	pub const COMMAND_NAME: Symbol = Symbol(1);
	/// Identifier category. Its text may arrive wrapped in double quotes.
	pub const IDENTIFIER: Symbol = Symbol(2);
	/// Bare literal text (numbers, words, selectors).
	pub const LITERAL: Symbol = Symbol(3);
	/// Structural punctuation, usually with no text of its own.
	pub const PUNCTUATION: Symbol = Symbol(4);

	pub const fn new(value: u32) -> Self {
		Self(value)
	}

	pub const fn value(self) -> u32 {
		self.0
	}

	pub fn is_identifier(self) -> bool {
		self == Self::IDENTIFIER
	}
}

/// One fragment of a parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenNode {
	symbol: Symbol,
	span: (u32, u32),
	#[serde(default)]
	parent: Option<NodeId>,
	#[serde(default)]
	child: Option<NodeId>,
	#[serde(default)]
	next: Option<NodeId>,
}

impl TokenNode {
	pub fn symbol(&self) -> Symbol {
		self.symbol
	}

	/// Byte range of this node's text within [`TokenTree::source`].
	pub fn span(&self) -> std::ops::Range<usize> {
		self.span.0 as usize..self.span.1 as usize
	}

	/// Length of the node's text in bytes; zero means no literal text.
	pub fn size(&self) -> usize {
		self.span.1.saturating_sub(self.span.0) as usize
	}

	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}

	/// First child.
	pub fn child(&self) -> Option<NodeId> {
		self.child
	}

	/// Next sibling.
	pub fn next(&self) -> Option<NodeId> {
		self.next
	}
}

/// Parse tree for one command line; owns every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTree {
	source: String,
	nodes: Vec<TokenNode>,
}

impl TokenTree {
	/// Starts building a tree with an empty root node.
	pub fn builder() -> TokenTreeBuilder {
		TokenTreeBuilder::new()
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns the node for `id`.
	///
	/// # Panics
	///
	/// Panics if `id` does not belong to this tree.
	pub fn node(&self, id: NodeId) -> &TokenNode {
		&self.nodes[id.index()]
	}

	pub fn get(&self, id: NodeId) -> Option<&TokenNode> {
		self.nodes.get(id.index())
	}

	/// Text covered by the node's span, or `""` for zero-length nodes.
	pub fn text(&self, id: NodeId) -> &str {
		self.source.get(self.node(id).span()).unwrap_or_default()
	}

	/// Every node id in arena order.
	pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		(0..self.nodes.len() as u32).map(NodeId)
	}

	/// Follows `parent` links upward from `id` until reaching a node without one.
	pub fn root_of(&self, id: NodeId) -> NodeId {
		let mut current = id;
		while let Some(parent) = self.node(current).parent {
			current = parent;
		}
		current
	}

	/// Iterates the sibling chain starting at `first`.
	pub fn siblings(&self, first: Option<NodeId>) -> Siblings<'_> {
		Siblings { tree: self, next: first }
	}

	/// Checks the structural invariants a walker relies on.
	///
	/// A valid tree has exactly one root without siblings, every link and span
	/// in range, each node reachable from the root exactly once, and parent
	/// links that agree with the child chains.
	pub fn validate(&self) -> Result<(), TreeError> {
		if self.nodes.is_empty() {
			return Err(TreeError::Empty);
		}

		let in_range = |target: NodeId| target.index() < self.nodes.len();
		for (id, node) in self.ids().zip(&self.nodes) {
			for target in [node.parent, node.child, node.next].into_iter().flatten() {
				if !in_range(target) {
					return Err(TreeError::DanglingLink { node: id, target });
				}
			}
			let (start, end) = node.span;
			if start > end || self.source.get(start as usize..end as usize).is_none() {
				return Err(TreeError::SpanOutOfBounds { node: id, start, end });
			}
		}

		let roots: Vec<NodeId> = self.ids().filter(|id| self.node(*id).parent.is_none()).collect();
		let &[root] = roots.as_slice() else {
			return Err(TreeError::RootCount { count: roots.len() });
		};
		if self.node(root).next.is_some() {
			return Err(TreeError::RootHasSibling { node: root });
		}

		let mut visited = vec![false; self.nodes.len()];
		visited[root.index()] = true;
		let mut pending = vec![root];
		while let Some(parent) = pending.pop() {
			let mut cursor = self.node(parent).child;
			while let Some(id) = cursor {
				if visited[id.index()] {
					return Err(TreeError::Cycle { node: id });
				}
				visited[id.index()] = true;
				if self.node(id).parent != Some(parent) {
					return Err(TreeError::ParentMismatch { node: id, expected: parent });
				}
				pending.push(id);
				cursor = self.node(id).next;
			}
		}

		match visited.iter().position(|seen| !seen) {
			Some(index) => Err(TreeError::Unreachable { node: NodeId(index as u32) }),
			None => Ok(()),
		}
	}
}

/// Iterator over a sibling chain, produced by [`TokenTree::siblings`].
pub struct Siblings<'a> {
	tree: &'a TokenTree,
	next: Option<NodeId>,
}

impl Iterator for Siblings<'_> {
	type Item = NodeId;

	fn next(&mut self) -> Option<NodeId> {
		let current = self.next?;
		self.next = self.tree.node(current).next;
		Some(current)
	}
}

/// Incremental builder used by in-process producers and tests.
///
/// Nodes are appended as the last child of their parent; node text is
/// appended to the shared source string separated by single spaces.
#[derive(Debug)]
pub struct TokenTreeBuilder {
	source: String,
	nodes: Vec<TokenNode>,
	last_child: Vec<Option<NodeId>>,
}

impl Default for TokenTreeBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TokenTreeBuilder {
	pub fn new() -> Self {
		Self {
			source: String::new(),
			nodes: vec![TokenNode {
				symbol: Symbol::ROOT,
				span: (0, 0),
				parent: None,
				child: None,
				next: None,
			}],
			last_child: vec![None],
		}
	}

	pub fn root(&self) -> NodeId {
		NodeId(0)
	}

	/// Appends a node under `parent` and returns its id.
	///
	/// # Panics
	///
	/// Panics if `parent` was not returned by this builder.
	pub fn push(&mut self, parent: NodeId, symbol: Symbol, text: &str) -> NodeId {
		assert!(parent.index() < self.nodes.len(), "unknown parent {parent}");

		let span = if text.is_empty() {
			let at = self.source.len() as u32;
			(at, at)
		} else {
			if !self.source.is_empty() {
				self.source.push(' ');
			}
			let start = self.source.len() as u32;
			self.source.push_str(text);
			(start, self.source.len() as u32)
		};

		let id = NodeId(self.nodes.len() as u32);
		self.nodes.push(TokenNode {
			symbol,
			span,
			parent: Some(parent),
			child: None,
			next: None,
		});
		self.last_child.push(None);

		match self.last_child[parent.index()] {
			Some(previous) => self.nodes[previous.index()].next = Some(id),
			None => self.nodes[parent.index()].child = Some(id),
		}
		self.last_child[parent.index()] = Some(id);
		id
	}

	/// Appends the command-name node under the root.
	pub fn command(&mut self, name: &str) -> NodeId {
		let root = self.root();
		self.push(root, Symbol::COMMAND_NAME, name)
	}

	pub fn build(self) -> TokenTree {
		TokenTree {
			source: self.source,
			nodes: self.nodes,
		}
	}
}
