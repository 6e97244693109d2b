//! doctree: rebuild the section hierarchy of a parsed document.
//!
//! Document parsers hand back a flat, ordered stream of typed elements: titles at some declared
//! depth, paragraphs, page breaks, footers. [`builder::TreeBuilder`] folds that stream into a
//! [`tree::SectionTree`] mirroring the document's headings, normalising depth so that every
//! section sits exactly one level below its parent even when the source skips or repeats levels.
//! The finished tree can be walked depth-first or flattened into [`document::ContentDocument`]s
//! for an embedding pipeline.
//!
//! ```
//! use doctree::builder::{BuildOptions, TreeBuilder};
//! use doctree::element::Element;
//!
//! let output = TreeBuilder::build(
//!     &BuildOptions::default(),
//!     vec![
//!         Element::body("Cover page"),
//!         Element::title("t1", "Scope", 0),
//!         Element::body("What is covered."),
//!     ],
//! );
//! let scope = output.node_for("t1").unwrap();
//! assert_eq!(output.tree[scope].content(), "What is covered.\n");
//! assert_eq!(output.tree[output.tree.root()].content(), "Cover page\n");
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod builder;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod input;
pub mod node;
pub mod render;
pub mod tree;

pub use builder::{BuildOptions, BuildOutput, Diagnostic, TreeBuilder};
pub use element::{Element, RawElement};
pub use error::{Error, Result};
pub use node::{NodeId, TreeNode};
pub use tree::SectionTree;
