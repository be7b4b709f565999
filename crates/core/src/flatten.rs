//! Rebuilds command arguments from a parse tree.
//!
//! The grammar engine hands us a tree, but commands want the arguments the
//! user typed: one string per argument, in order. Every top-level sibling that
//! follows the command-name node is one argument; its text is everything
//! underneath it, in document order, joined by single spaces.
//!
//! Tree depth is controlled by the producer's grammar, so the walk keeps an
//! explicit work list instead of recursing.


use cmdbridge_protocol::{NodeId, TokenTree};
use tracing::debug;

/// Appends one argument per top-level sibling of the command-name node.
///
/// `start` may be any node of the tree; the root is found by following
/// parent links. A tree without a command-name node yields no arguments.
///
/// Does nothing if `out` already holds arguments, so repeated calls against
/// the same destination never walk the tree twice.
pub fn flatten_arguments(tree: &TokenTree, start: NodeId, out: &mut Vec<String>) {
	if !out.is_empty() {
		return;
	}

	let root = tree.root_of(start);
	let Some(command_name) = tree.node(root).child() else {
		debug!(%root, "parse tree has no command name");
		return;
	};

	for argument in tree.siblings(tree.node(command_name).next()) {
		out.push(collect_text(tree, argument));
	}
	debug!(count = out.len(), "flattened command arguments");
}

/// Concatenates the text of `subtree` depth-first.
///
/// The sibling is pushed before the child: the work list is LIFO, so the
/// child's whole subtree is consumed before the walk moves sideways. The
/// subtree root's own siblings are other arguments and are never followed.
fn collect_text(tree: &TokenTree, subtree: NodeId) -> String {
	let mut result = String::new();
	let mut pending = vec![subtree];

	while let Some(id) = pending.pop() {
		let node = tree.node(id);

		if node.size() > 0 {
			if !result.is_empty() {
				result.push(' ');
			}
			let text = tree.text(id);
			if node.symbol().is_identifier() {
				result.push_str(strip_quotes(text));
			} else {
				result.push_str(text);
			}
		}

		if id != subtree {
			if let Some(next) = node.next() {
				pending.push(next);
			}
		}
		if let Some(child) = node.child() {
			pending.push(child);
		}
	}

	result
}

/// Removes one pair of surrounding double quotes, if both are present.
fn strip_quotes(text: &str) -> &str {
	if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
		&text[1..text.len() - 1]
	} else {
		text
	}
}
