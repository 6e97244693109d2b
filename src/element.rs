//! The element stream produced by the upstream document parser.
//!
//! Parsers such as unstructured-io emit a flat list of records tagged with a category string.
//! [`RawElement`] mirrors that wire shape loosely so both the `category`/`id` and the
//! `type`/`element_id` spellings deserialize, and [`Element::from_raw`] narrows each record into
//! the closed [`Element`] variant the builder dispatches on.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Deepest `category_depth` accepted when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Default, Deserialize)]
/// One record exactly as the parsing collaborator serialises it.
pub struct RawElement {
    /// Category tag such as `Title`, `NarrativeText`, `PageBreak` or `Footer`.
    #[serde(default, alias = "type")]
    pub category: Option<String>,
    /// Element id, stable within one document.
    #[serde(default, alias = "element_id")]
    pub id: Option<String>,
    /// Text carried by the element.
    #[serde(default)]
    pub text: String,
    /// Structural metadata attached by the parser.
    #[serde(default)]
    pub metadata: RawMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// The subset of parser metadata the builder reads.
pub struct RawMetadata {
    /// Heading depth for titles, 0 for the shallowest heading.
    #[serde(default)]
    pub category_depth: Option<usize>,
    /// Id of the element this one structurally belongs to.
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated element, dispatched on by exhaustive match.
pub enum Element {
    /// A heading at a declared (possibly irregular) depth.
    Title {
        /// Element id, registered in the builder's index.
        id: String,
        /// Heading text.
        text: String,
        /// Declared depth, not necessarily contiguous with its neighbours.
        depth: usize,
    },
    /// Page separator, carries no content.
    PageBreak,
    /// Running footer, carries no section content.
    Footer,
    /// Anything else: paragraphs, list items, tables, headers.
    Body {
        /// Element id, used only to attribute diagnostics.
        id: Option<String>,
        /// Body text.
        text: String,
        /// Declared structural parent, if any.
        parent_id: Option<String>,
    },
}

impl Element {
    #[must_use]
    /// Build a title element.
    pub fn title(id: impl Into<String>, text: impl Into<String>, depth: usize) -> Self {
        Self::Title {
            id: id.into(),
            text: text.into(),
            depth,
        }
    }

    #[must_use]
    /// Build a body element that falls back to the current heading.
    pub fn body(text: impl Into<String>) -> Self {
        Self::Body {
            id: None,
            text: text.into(),
            parent_id: None,
        }
    }

    #[must_use]
    /// Build a body element addressed to the element with id `parent_id`.
    pub fn body_under(
        id: impl Into<String>,
        text: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self::Body {
            id: Some(id.into()),
            text: text.into(),
            parent_id: Some(parent_id.into()),
        }
    }

    /// Narrow a raw record into an [`Element`], accepting depths up to [`DEFAULT_MAX_DEPTH`].
    ///
    /// `index` is the record's position in the stream and only serves error attribution.
    ///
    /// # Errors
    ///
    /// Fails when the category is missing, or when a title has no id, no depth or a depth
    /// above the maximum.
    pub fn from_raw(index: usize, raw: RawElement) -> Result<Self> {
        Self::from_raw_bounded(index, raw, DEFAULT_MAX_DEPTH)
    }

    /// Narrow a raw record into an [`Element`], rejecting titles deeper than `max_depth`.
    ///
    /// # Errors
    ///
    /// As [`Element::from_raw`], with `max_depth` as the limit.
    pub fn from_raw_bounded(index: usize, raw: RawElement, max_depth: usize) -> Result<Self> {
        let category = raw
            .category
            .filter(|c| !c.trim().is_empty())
            .ok_or(Error::MissingCategory { index })?;

        let element = match category.as_str() {
            "Title" => {
                let id = raw
                    .id
                    .filter(|id| !id.is_empty())
                    .ok_or(Error::MissingId { index })?;
                let depth = raw
                    .metadata
                    .category_depth
                    .ok_or_else(|| Error::MissingDepth {
                        index,
                        id: id.clone(),
                    })?;
                if depth > max_depth {
                    return Err(Error::DepthTooLarge {
                        index,
                        id,
                        depth,
                        max: max_depth,
                    });
                }
                Self::Title {
                    id,
                    text: raw.text,
                    depth,
                }
            }
            "PageBreak" => Self::PageBreak,
            "Footer" => Self::Footer,
            _ => Self::Body {
                id: raw.id,
                text: raw.text,
                parent_id: raw.metadata.parent_id.filter(|p| !p.is_empty()),
            },
        };

        Ok(element)
    }
}

#[cfg(test)]
#[path = "tests/element.rs"]
mod tests;
