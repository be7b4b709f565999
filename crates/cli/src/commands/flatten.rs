//! `flatten`: show the arguments a tree turns into, without dispatching.

use cmdbridge::{CommandInvocation, NodeId};

use super::load_tree;
use crate::cli::TreeArgs;
use crate::error::Result;
use crate::output::{FlattenData, OutputFormat, ResultBuilder, print_result};

pub fn execute(args: &TreeArgs, format: OutputFormat) -> Result<bool> {
	let builder = ResultBuilder::new("flatten");
	let tree = load_tree(args)?;
	let root = tree.root_of(NodeId::new(0));

	let mut out = Vec::new();
	cmdbridge::flatten_arguments(&tree, root, &mut out);
	let name = CommandInvocation::from_tree(&tree, root).map(|inv| inv.name().to_string());

	print_result(&builder.data(FlattenData { name, args: out }).build(), format);
	Ok(true)
}
