use super::*;

fn say_tree() -> (TokenTree, NodeId, NodeId) {
	let mut b = TokenTree::builder();
	let root = b.root();
	b.command("say");
	let first = b.push(root, Symbol::LITERAL, "hello");
	let second = b.push(root, Symbol::IDENTIFIER, "\"big world\"");
	(b.build(), first, second)
}

#[test]
fn builder_links_children_in_order() {
	let (tree, first, second) = say_tree();
	let root = NodeId::new(0);

	let children: Vec<NodeId> = tree.siblings(tree.node(root).child()).collect();
	assert_eq!(children.len(), 3);
	assert_eq!(children[1], first);
	assert_eq!(children[2], second);
	assert_eq!(tree.node(first).parent(), Some(root));
	assert_eq!(tree.text(children[0]), "say");
	assert_eq!(tree.text(second), "\"big world\"");
	assert_eq!(tree.source(), "say hello \"big world\"");
}

#[test]
fn empty_text_has_zero_size() {
	let mut b = TokenTree::builder();
	let root = b.root();
	b.command("tp");
	let punct = b.push(root, Symbol::PUNCTUATION, "");
	let tree = b.build();

	assert_eq!(tree.node(punct).size(), 0);
	assert_eq!(tree.text(punct), "");
	assert_eq!(tree.source(), "tp");
}

#[test]
fn root_of_walks_parent_links() {
	let mut b = TokenTree::builder();
	let root = b.root();
	b.command("give");
	let outer = b.push(root, Symbol::PUNCTUATION, "");
	let inner = b.push(outer, Symbol::PUNCTUATION, "");
	let leaf = b.push(inner, Symbol::LITERAL, "diamond");
	let tree = b.build();

	assert_eq!(tree.root_of(leaf), root);
	assert_eq!(tree.root_of(root), root);
}

#[test]
fn built_trees_validate() {
	let (tree, _, _) = say_tree();
	assert_eq!(tree.validate(), Ok(()));
	assert_eq!(TokenTree::builder().build().validate(), Ok(()));
}

#[test]
fn wire_format_round_trips_through_json() {
	let (tree, _, _) = say_tree();
	let json = serde_json::to_value(&tree).unwrap();

	assert_eq!(json["nodes"][0]["symbol"], 0);
	assert_eq!(json["nodes"][1]["span"], serde_json::json!([0, 3]));
	assert_eq!(json["nodes"][1]["parent"], 0);

	let back: TokenTree = serde_json::from_value(json).unwrap();
	assert_eq!(back, tree);
}

fn from_json(value: serde_json::Value) -> TokenTree {
	serde_json::from_value(value).unwrap()
}

#[test]
fn validate_rejects_empty_tree() {
	let tree = from_json(serde_json::json!({ "source": "", "nodes": [] }));
	assert_eq!(tree.validate(), Err(TreeError::Empty));
}

#[test]
fn validate_rejects_dangling_link() {
	let tree = from_json(serde_json::json!({
		"source": "x",
		"nodes": [{ "symbol": 0, "span": [0, 0], "child": 7 }]
	}));
	assert_eq!(
		tree.validate(),
		Err(TreeError::DanglingLink {
			node: NodeId::new(0),
			target: NodeId::new(7)
		})
	);
}

#[test]
fn validate_rejects_span_past_source() {
	let tree = from_json(serde_json::json!({
		"source": "ab",
		"nodes": [
			{ "symbol": 0, "span": [0, 0], "child": 1 },
			{ "symbol": 1, "span": [0, 9], "parent": 0 }
		]
	}));
	assert!(matches!(tree.validate(), Err(TreeError::SpanOutOfBounds { start: 0, end: 9, .. })));
}

#[test]
fn validate_rejects_span_inside_multibyte_char() {
	let tree = from_json(serde_json::json!({
		"source": "é",
		"nodes": [
			{ "symbol": 0, "span": [0, 0], "child": 1 },
			{ "symbol": 1, "span": [0, 1], "parent": 0 }
		]
	}));
	assert!(matches!(tree.validate(), Err(TreeError::SpanOutOfBounds { .. })));
}

#[test]
fn validate_rejects_two_roots() {
	let tree = from_json(serde_json::json!({
		"source": "",
		"nodes": [
			{ "symbol": 0, "span": [0, 0] },
			{ "symbol": 0, "span": [0, 0] }
		]
	}));
	assert_eq!(tree.validate(), Err(TreeError::RootCount { count: 2 }));
}

#[test]
fn validate_rejects_sibling_cycle() {
	let tree = from_json(serde_json::json!({
		"source": "a b",
		"nodes": [
			{ "symbol": 0, "span": [0, 0], "child": 1 },
			{ "symbol": 1, "span": [0, 1], "parent": 0, "next": 2 },
			{ "symbol": 3, "span": [2, 3], "parent": 0, "next": 1 }
		]
	}));
	assert_eq!(tree.validate(), Err(TreeError::Cycle { node: NodeId::new(1) }));
}

#[test]
fn validate_rejects_wrong_parent() {
	let tree = from_json(serde_json::json!({
		"source": "a b",
		"nodes": [
			{ "symbol": 0, "span": [0, 0], "child": 1 },
			{ "symbol": 1, "span": [0, 1], "parent": 0, "next": 2 },
			{ "symbol": 3, "span": [2, 3], "parent": 1 }
		]
	}));
	assert_eq!(
		tree.validate(),
		Err(TreeError::ParentMismatch {
			node: NodeId::new(2),
			expected: NodeId::new(0)
		})
	);
}

#[test]
fn validate_rejects_orphaned_node() {
	let tree = from_json(serde_json::json!({
		"source": "a",
		"nodes": [
			{ "symbol": 0, "span": [0, 0] },
			{ "symbol": 1, "span": [0, 1], "parent": 0 }
		]
	}));
	assert_eq!(tree.validate(), Err(TreeError::Unreachable { node: NodeId::new(1) }));
}

#[test]
fn identifier_symbol_is_the_only_identifier() {
	assert!(Symbol::IDENTIFIER.is_identifier());
	assert!(!Symbol::LITERAL.is_identifier());
	assert!(!Symbol::new(99).is_identifier());
}
