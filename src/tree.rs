//! The arena that owns every [`TreeNode`] of one rebuilt document.
//!
//! Nodes are only ever appended: a node is created under an existing parent, gets its
//! `title_path` fixed at that moment, and is never removed or reparented. Handles therefore stay
//! valid for the life of the tree, and arena order is creation order.

use crate::node::{NodeId, TreeNode};
use std::ops::Index;

/// Title given to the synthetic root when none is configured.
pub const ROOT_TITLE: &str = "根节点";

/// Separator placed between titles in a `title_path` when none is configured.
pub const DEFAULT_SEPARATOR: &str = "/";

#[derive(Clone, Debug)]
/// A section hierarchy with exactly one root at level 0.
pub struct SectionTree {
    nodes: Vec<TreeNode>,
    separator: String,
}

impl Default for SectionTree {
    fn default() -> Self {
        Self::new(ROOT_TITLE, DEFAULT_SEPARATOR)
    }
}

impl SectionTree {
    #[must_use]
    /// Create a tree holding only its root.
    ///
    /// The root title never appears in any `title_path`; `separator` joins the titles that do.
    pub fn new(root_title: &str, separator: &str) -> Self {
        let root = TreeNode::new(root_title.to_string(), String::new(), String::new(), 0);
        Self {
            nodes: vec![root],
            separator: separator.to_string(),
        }
    }

    #[must_use]
    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    /// Look up a node, returning `None` for a handle from another tree.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Separator used when joining title paths.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Create a section one level below `parent` and append it to the parent's children.
    ///
    /// The new node's `title_path` (the parent's path plus `title`) is fixed here and never
    /// changes.
    pub fn add_child(&mut self, parent: NodeId, title: &str, content: &str) -> NodeId {
        let parent_node = &self[parent];
        let level = parent_node.level + 1;
        let title_path = if parent_node.is_root() {
            title.to_string()
        } else {
            format!("{}{}{title}", parent_node.title_path, self.separator)
        };

        let id = NodeId(self.nodes.len());
        let mut node = TreeNode::new(title.to_string(), title_path, content.to_string(), level);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append `text` plus a newline to a node's content. Empty text is ignored.
    pub fn append_content(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].append_content(text);
    }

    #[must_use]
    /// Walk from `start` up to the root, yielding `start` first.
    pub fn ancestors(&self, start: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(start),
        }
    }

    #[must_use]
    /// Depth-first pre-order iteration over the whole tree.
    ///
    /// Uses an explicit stack, so arbitrarily deep trees do not grow the call stack.
    pub fn iter(&self) -> DepthFirst<'_> {
        self.iter_from(self.root())
    }

    #[must_use]
    /// Depth-first pre-order iteration over the subtree rooted at `start`.
    pub fn iter_from(&self, start: NodeId) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            stack: vec![start],
        }
    }

    /// Invoke `visitor` once per node in pre-order, children in document order.
    pub fn walk<F>(&self, mut visitor: F)
    where
        F: FnMut(&TreeNode),
    {
        for (_, node) in self.iter() {
            visitor(node);
        }
    }

    /// Invoke `visitor` once per node of the subtree rooted at `start`.
    pub fn walk_from<F>(&self, start: NodeId, mut visitor: F)
    where
        F: FnMut(&TreeNode),
    {
        for (_, node) in self.iter_from(start) {
            visitor(node);
        }
    }

    #[must_use]
    /// Deepest level present in the tree.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.level).max().unwrap_or(0)
    }

    #[must_use]
    /// First node in pre-order whose `title_path` equals `path`.
    pub fn find_by_title_path(&self, path: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| !node.is_root() && node.title_path == path)
            .map(|(id, _)| id)
    }
}

impl Index<NodeId> for SectionTree {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }
}

impl<'a> IntoIterator for &'a SectionTree {
    type Item = (NodeId, &'a TreeNode);
    type IntoIter = DepthFirst<'a>;

    fn into_iter(self) -> DepthFirst<'a> {
        self.iter()
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a> {
    tree: &'a SectionTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.tree[id];
        self.next = node.parent;
        Some((id, node))
    }
}

/// Pre-order iterator driven by an explicit stack.
pub struct DepthFirst<'a> {
    tree: &'a SectionTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree[id];
        // Reversed so the first child is popped next.
        self.stack.extend(node.children.iter().rev().copied());
        Some((id, node))
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
