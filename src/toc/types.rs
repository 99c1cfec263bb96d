use serde::{Deserialize, Serialize};

/// Identifier of the element that receives the generated entries
pub const CONTAINER_ID: &str = "toc";

/// Prefix of identifiers synthesized for headings that have none
pub const ID_PREFIX: &str = "TableOfContents";

/// Tags scanned for headings
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Tag of the block wrapping each generated link
pub const ENTRY_TAG: &str = "div";

/// Where headings are looked for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanScope {
    /// Every heading in the document
    #[default]
    Document,
    /// Only headings inside a content region: a tag name (`article`)
    /// or an element id (`#main`)
    Region(String),
}

impl ScanScope {
    pub fn from_region(region: Option<&str>) -> Self {
        match region {
            Some(selector) => ScanScope::Region(selector.to_string()),
            None => ScanScope::Document,
        }
    }
}

/// Options for table of contents generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocOptions {
    pub scope: ScanScope,
}

impl TocOptions {
    pub fn with_scope(mut self, scope: ScanScope) -> Self {
        self.scope = scope;
        self
    }
}

/// Record of one generated entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Lowercase heading tag, also the class of the wrapping block
    pub tag: String,
    /// Identifier the link points at
    pub id: String,
    /// Link text
    pub text: String,
    /// Whether the identifier was synthesized during this run
    pub assigned: bool,
}

impl TocEntry {
    /// Heading level, 1 for h1 through 6 for h6
    pub fn level(&self) -> usize {
        self.tag
            .get(1..)
            .and_then(|level| level.parse().ok())
            .unwrap_or(0)
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Identifier synthesized for the heading at `index` among all scanned headings
pub fn synthesized_id(index: usize) -> String {
    format!("{}{}", ID_PREFIX, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_id() {
        assert_eq!(synthesized_id(0), "TableOfContents0");
        assert_eq!(synthesized_id(12), "TableOfContents12");
    }

    #[test]
    fn test_entry_level_and_href() {
        let entry = TocEntry {
            tag: "h3".to_string(),
            id: "custom-id".to_string(),
            text: "Custom".to_string(),
            assigned: false,
        };

        assert_eq!(entry.level(), 3);
        assert_eq!(entry.href(), "#custom-id");
    }

    #[test]
    fn test_scope_from_region() {
        assert_eq!(ScanScope::from_region(None), ScanScope::Document);
        assert_eq!(
            ScanScope::from_region(Some("article")),
            ScanScope::Region("article".to_string())
        );
    }
}
