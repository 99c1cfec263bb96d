use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::toc::{ScanScope, TocOptions};

/// Table of contents run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the built HTML pages
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Where processed pages are written; pages are rewritten in place when unset
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Restrict the heading scan to a content region (`article`, `#main`)
    #[serde(default)]
    pub content_region: Option<String>,

    /// File extensions treated as pages
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns, relative to `source`, of pages to leave alone
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Fail the whole run when any page fails
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: defaults::default_source(),
            destination: None,
            content_region: None,
            extensions: defaults::default_extensions(),
            exclude: Vec::new(),
            strict: false,
        }
    }
}

impl Config {
    pub fn toc_options(&self) -> TocOptions {
        TocOptions::default().with_scope(ScanScope::from_region(self.content_region.as_deref()))
    }
}
