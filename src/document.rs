//! Flat content documents handed to the embedding and indexing side.
//!
//! Each section becomes one record whose page content is the section body and whose metadata
//! carries enough to find the section again: its title, breadcrumb and stable id.

use crate::node::TreeNode;
use crate::tree::SectionTree;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One section, flattened for an embedding pipeline.
pub struct ContentDocument {
    /// Section body text.
    pub page_content: String,
    /// Where the body came from.
    pub metadata: DocumentMetadata,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Provenance of a [`ContentDocument`].
pub struct DocumentMetadata {
    /// Section heading.
    pub title: String,
    /// Breadcrumb from the top-level heading down to this one.
    pub title_path: String,
    /// Stable per-node id.
    pub doc_id: Uuid,
    /// Normalised depth of the section.
    pub level: usize,
}

impl From<&TreeNode> for ContentDocument {
    fn from(node: &TreeNode) -> Self {
        Self {
            page_content: node.content().to_string(),
            metadata: DocumentMetadata {
                title: node.title().to_string(),
                title_path: node.title_path().to_string(),
                doc_id: node.id(),
                level: node.level(),
            },
        }
    }
}

impl SectionTree {
    #[must_use]
    /// Flatten the tree in pre-order, one document per section.
    ///
    /// With `skip_empty`, sections whose content is only whitespace are left out; the root
    /// preamble is treated like any other section.
    pub fn to_content_documents(&self, skip_empty: bool) -> Vec<ContentDocument> {
        let mut documents = Vec::new();
        self.walk(|node| {
            if skip_empty && node.content().trim().is_empty() {
                return;
            }
            documents.push(ContentDocument::from(node));
        });
        documents
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
