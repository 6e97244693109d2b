//! Renders a rebuilt tree as a box-drawing outline, one line per section.
//!
//! ```text
//! 根节点
//! ├── Introduction
//! │   └── Background
//! └── Methods
//! ```

use crate::node::NodeId;
use crate::tree::SectionTree;

/// Generate box-drawing branch for a node given its ancestors' indentation.
fn branch(indent: &str, is_last: bool) -> String {
    if is_last {
        format!("{indent}└── ")
    } else {
        format!("{indent}├── ")
    }
}

#[must_use]
/// Outline of the whole tree, root first, children in document order.
pub fn outline(tree: &SectionTree) -> String {
    let mut out = String::new();
    let root = tree.root();
    out.push_str(tree[root].title());
    out.push('\n');

    // (node, indentation inherited from ancestors, whether it is the last sibling)
    let mut stack: Vec<(NodeId, String, bool)> = Vec::new();
    push_children(tree, root, "", &mut stack);

    while let Some((id, indent, is_last)) = stack.pop() {
        let node = &tree[id];
        out.push_str(&branch(&indent, is_last));
        out.push_str(node.title());
        out.push('\n');

        let child_indent = if is_last {
            format!("{indent}    ")
        } else {
            format!("{indent}│   ")
        };
        push_children(tree, id, &child_indent, &mut stack);
    }

    out
}

fn push_children(
    tree: &SectionTree,
    parent: NodeId,
    indent: &str,
    stack: &mut Vec<(NodeId, String, bool)>,
) {
    let children = tree[parent].children();
    for (i, &child) in children.iter().enumerate().rev() {
        stack.push((child, indent.to_string(), i + 1 == children.len()));
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
