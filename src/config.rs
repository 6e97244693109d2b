//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a doctree.toml, and if present we load settings from there.
//! This provides the root title, the title path separator, which files to pick up when a
//! directory is given, whether sections without body text are handed on for indexing, and
//! how deep a heading may be declared.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "doctree.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from doctree.toml or falling back to defaults.
pub struct Config {
    #[facet(default = crate::tree::ROOT_TITLE.to_string())]
    /// Title given to the synthetic root section.
    pub root_title: String,
    #[facet(default = crate::tree::DEFAULT_SEPARATOR.to_string())]
    /// Separator placed between titles in each title path.
    pub title_separator: String,
    #[facet(default = vec!["json".to_string(), "ndjson".to_string()])]
    /// File suffixes to match when scanning directories for element streams.
    pub file_extensions: Vec<String>,
    #[facet(default = true)]
    /// Leave sections with blank content out of the exported content documents.
    pub skip_empty: bool,
    #[facet(default = crate::element::DEFAULT_MAX_DEPTH)]
    /// Deepest heading level an element stream may declare.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Every field carries a facet default, so an empty document always parses.
        facet_toml::from_str::<Self>("").expect("all config fields have defaults")
    }
}

impl Config {
    #[must_use]
    /// Load configuration from doctree.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring invalid config: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
