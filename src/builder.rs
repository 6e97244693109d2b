//! Rebuilds the section hierarchy from a flat element stream in a single forward pass.
//!
//! The builder keeps a frontier: the most recent heading node and the depth its element
//! declared. Each new heading is placed relative to that frontier:
//!
//! ```text
//! depth 0            -> child of the root
//! shallower than     -> sibling of the frontier's ancestor at the new depth
//! same as            -> sibling of the frontier
//! deeper than        -> one child per skipped level, every one titled after the new heading
//! ```
//!
//! A node placed for a heading of declared depth `d` always ends up at level `d + 1`, and every
//! child sits exactly one level below its parent, whatever the source depths look like. Body
//! text before the first heading becomes the root's preamble; afterwards it goes to the node its
//! element names as parent, or to the frontier when it names none.

use crate::config::Config;
use crate::element::{Element, RawElement, DEFAULT_MAX_DEPTH};
use crate::error::Result;
use crate::node::NodeId;
use crate::tree::{SectionTree, DEFAULT_SEPARATOR, ROOT_TITLE};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Characters of element text quoted in a diagnostic.
const SNIPPET_CHARS: usize = 40;

#[derive(Clone, Debug)]
/// Naming choices for the tree a builder produces.
pub struct BuildOptions {
    /// Title of the synthetic root.
    pub root_title: String,
    /// Separator placed between titles in `title_path`.
    pub title_separator: String,
    /// Deepest `category_depth` a title may declare.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root_title: ROOT_TITLE.to_string(),
            title_separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&Config> for BuildOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            root_title: cfg.root_title.clone(),
            title_separator: cfg.title_separator.clone(),
            max_depth: cfg.max_depth,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A data-quality problem in the element stream that the builder stepped over.
pub enum Diagnostic {
    /// A body element named a parent that no earlier heading registered; its text was dropped.
    UnresolvedParent {
        /// Id of the offending element, if it had one.
        element_id: Option<String>,
        /// The parent id that did not resolve.
        parent_id: String,
        /// Leading characters of the dropped text.
        snippet: String,
    },
    /// A heading reused the id of an earlier heading; the index now points at the later node.
    DuplicateTitleId {
        /// The reused id.
        element_id: String,
    },
    /// A heading declared a depth above the maximum and was placed at the maximum instead.
    DepthClamped {
        /// Id of the heading.
        element_id: String,
        /// Depth the element declared.
        depth: usize,
        /// Depth it was placed at.
        max: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedParent {
                element_id,
                parent_id,
                snippet,
            } => write!(
                f,
                "parent id {parent_id} not found for element {}: {snippet:?}, skipped",
                element_id.as_deref().unwrap_or("<no id>")
            ),
            Self::DuplicateTitleId { element_id } => {
                write!(f, "title id {element_id} seen more than once")
            }
            Self::DepthClamped {
                element_id,
                depth,
                max,
            } => write!(
                f,
                "title {element_id} declares depth {depth}, placed at maximum depth {max}"
            ),
        }
    }
}

#[derive(Debug)]
/// Everything one build hands back to its caller.
pub struct BuildOutput {
    /// The completed hierarchy.
    pub tree: SectionTree,
    /// Element id of every heading to the node created for it (fillers are not indexed).
    pub node_map: HashMap<String, NodeId>,
    /// Problems stepped over during the pass, in stream order.
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    #[must_use]
    /// Node registered for the heading element with id `element_id`.
    pub fn node_for(&self, element_id: &str) -> Option<NodeId> {
        self.node_map.get(element_id).copied()
    }
}

/// Single-use state machine that folds an element stream into a [`SectionTree`].
pub struct TreeBuilder {
    tree: SectionTree,
    max_depth: usize,
    node_map: HashMap<String, NodeId>,
    diagnostics: Vec<Diagnostic>,
    /// Declared depth and node of the latest heading; `None` until the first heading.
    frontier: Option<(usize, NodeId)>,
}

impl TreeBuilder {
    #[must_use]
    /// Start a build with an empty tree.
    pub fn new(options: &BuildOptions) -> Self {
        Self {
            tree: SectionTree::new(&options.root_title, &options.title_separator),
            max_depth: options.max_depth,
            node_map: HashMap::new(),
            diagnostics: Vec::new(),
            frontier: None,
        }
    }

    #[must_use]
    /// Build a tree from an already validated element stream.
    pub fn build<I>(options: &BuildOptions, elements: I) -> BuildOutput
    where
        I: IntoIterator<Item = Element>,
    {
        let mut builder = Self::new(options);
        for element in elements {
            builder.push(element);
        }
        builder.finish()
    }

    /// Validate every raw record, then build.
    ///
    /// Validation completes before the pass starts, so a malformed record yields an error
    /// rather than a partial tree.
    ///
    /// # Errors
    ///
    /// Returns the first record that cannot be narrowed into an [`Element`], including titles
    /// deeper than `options.max_depth`.
    pub fn build_raw(options: &BuildOptions, raw: Vec<RawElement>) -> Result<BuildOutput> {
        let elements = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Element::from_raw_bounded(index, raw, options.max_depth))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(options, elements))
    }

    #[must_use]
    /// The tree as built so far.
    pub fn tree(&self) -> &SectionTree {
        &self.tree
    }

    /// Apply one element to the tree.
    pub fn push(&mut self, element: Element) {
        match element {
            Element::PageBreak | Element::Footer => {}
            Element::Title { id, text, depth } => self.place_title(id, &text, depth),
            Element::Body {
                id,
                text,
                parent_id: Some(parent_id),
            } => match self.node_map.get(&parent_id) {
                Some(&node) => self.tree.append_content(node, &text),
                None => self.report(Diagnostic::UnresolvedParent {
                    element_id: id,
                    parent_id,
                    snippet: text.chars().take(SNIPPET_CHARS).collect(),
                }),
            },
            Element::Body {
                parent_id: None,
                text,
                ..
            } => {
                // Before the first heading this is the root's preamble.
                let node = self.frontier.map_or(self.tree.root(), |(_, node)| node);
                self.tree.append_content(node, &text);
            }
        }
    }

    #[must_use]
    /// Finish the pass and hand over the tree, index and diagnostics.
    pub fn finish(self) -> BuildOutput {
        info!(
            nodes = self.tree.node_count(),
            headings = self.node_map.len(),
            diagnostics = self.diagnostics.len(),
            "section tree built"
        );
        BuildOutput {
            tree: self.tree,
            node_map: self.node_map,
            diagnostics: self.diagnostics,
        }
    }

    fn place_title(&mut self, id: String, title: &str, depth: usize) {
        let root = self.tree.root();

        // Every skipped level costs a node, so the depth is bounded.
        let depth = if depth > self.max_depth {
            self.report(Diagnostic::DepthClamped {
                element_id: id.clone(),
                depth,
                max: self.max_depth,
            });
            self.max_depth
        } else {
            depth
        };

        let node = match self.frontier {
            _ if depth == 0 => self.tree.add_child(root, title, ""),
            // Nothing placed yet: bridge down from the root, which stands at depth -1.
            None => self.descend(root, depth.saturating_add(1), title),
            Some((last_depth, last_node)) => match last_depth.cmp(&depth) {
                Ordering::Greater => {
                    // The frontier's ancestor at `depth` is `last_depth - depth` steps up,
                    // and the new heading becomes its sibling.
                    let parent = self
                        .tree
                        .ancestors(last_node)
                        .nth(last_depth - depth + 1)
                        .map_or(root, |(id, _)| id);
                    self.tree.add_child(parent, title, "")
                }
                Ordering::Equal => {
                    let parent = self.tree[last_node].parent().unwrap_or(root);
                    self.tree.add_child(parent, title, "")
                }
                Ordering::Less => self.descend(last_node, depth - last_depth, title),
            },
        };

        debug!(
            id = %id,
            depth,
            level = self.tree[node].level(),
            title_path = self.tree[node].title_path(),
            "placed heading"
        );

        if self.node_map.insert(id.clone(), node).is_some() {
            self.report(Diagnostic::DuplicateTitleId { element_id: id });
        }
        self.frontier = Some((depth, node));
    }

    /// Add `steps` nested children under `from`, all titled `title`; the last one is returned.
    fn descend(&mut self, from: NodeId, steps: usize, title: &str) -> NodeId {
        let mut node = from;
        for _ in 0..steps {
            node = self.tree.add_child(node, title, "");
        }
        node
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
