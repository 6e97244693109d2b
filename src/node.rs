//! Section node representation for rebuilt document trees.
//!
//! A node represents one heading of the source document (or a filler standing in for a skipped
//! heading level). Nodes live in the arena of a [`crate::tree::SectionTree`] and refer to each
//! other through [`NodeId`] handles: the children list is the owning relation, the parent
//! handle is a back-reference for upward walks only.

use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle to a node inside the arena of the tree that created it.
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    /// Position of the node in its tree's arena (creation order).
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
/// One section of the rebuilt hierarchy.
pub struct TreeNode {
    /// Heading text, or the root sentinel title.
    pub(crate) title: String,
    /// Ancestor titles from below the root down to this node, joined once at creation.
    pub(crate) title_path: String,
    /// Body text in document order, one line per appended element.
    pub(crate) content: String,
    /// Depth in the tree; the root is 0 and every child sits at parent + 1.
    pub(crate) level: usize,
    /// Subsections in the order their headings were encountered.
    pub(crate) children: Vec<NodeId>,
    /// Containing section, `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Stable identifier handed to downstream indexers.
    pub(crate) id: Uuid,
}

impl TreeNode {
    pub(crate) fn new(title: String, title_path: String, content: String, level: usize) -> Self {
        Self {
            title,
            title_path,
            content,
            level,
            children: Vec::new(),
            parent: None,
            id: Uuid::new_v4(),
        }
    }

    /// Append one line of body text. Empty text leaves the content untouched.
    pub(crate) fn append_content(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.content.push_str(text);
        self.content.push('\n');
    }

    #[must_use]
    /// Heading text of this section.
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    /// Breadcrumb of every ancestor title below the root, ending with this one.
    pub fn title_path(&self) -> &str {
        &self.title_path
    }

    #[must_use]
    /// Accumulated body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    /// Normalised depth; 0 for the root.
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    /// Direct subsections in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    /// Containing section.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    /// Stable identifier, never reused.
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    /// Whether this node is the root sentinel.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
