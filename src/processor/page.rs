use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::dom::{Document, HtmlDocument};
use crate::toc::types::{CONTAINER_ID, HEADING_TAGS};
use crate::toc::{build_table_of_contents_with, TocEntry, TocOptions};
use crate::utils::error::{TocError, TocResult};

/// A page found under the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path of the page on disk
    pub path: PathBuf,
    /// Path relative to the source directory, `/`-separated
    pub relative_path: String,
    /// Where the processed page goes
    pub output_path: PathBuf,
}

impl Page {
    pub fn is_in_place(&self) -> bool {
        self.path == self.output_path
    }
}

/// Run the table of contents builder over one HTML source string.
///
/// Returns the serialized document and the generated entries.
pub fn process_html(source: &str, options: &TocOptions) -> TocResult<(String, Vec<TocEntry>)> {
    let mut doc = HtmlDocument::parse(source);

    if has_generated_entries(&doc) {
        warn!("Container #{} already holds entries; they will be duplicated", CONTAINER_ID);
    }

    let entries = build_table_of_contents_with(&mut doc, options)?;
    Ok((doc.to_html(), entries))
}

/// Read a page and return its entries without writing anything
pub fn inspect_file<P: AsRef<Path>>(path: P, options: &TocOptions) -> TocResult<Vec<TocEntry>> {
    let source = read_page(path.as_ref())?;
    let (_, entries) = process_html(&source, options)?;
    Ok(entries)
}

/// Process one page and write it to its output path
pub fn process_page(page: &Page, options: &TocOptions) -> TocResult<Vec<TocEntry>> {
    debug!("Processing {}", page.relative_path);

    let source = read_page(&page.path)?;
    let (html, entries) = process_html(&source, options)?;
    crate::utils::fs::write_file(&page.output_path, &html)?;

    debug!("Wrote {} entries to {}", entries.len(), page.output_path.display());
    Ok(entries)
}

pub(crate) fn read_page(path: &Path) -> TocResult<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| TocError::Parse(format!("{} is not valid UTF-8: {}", path.display(), e)))
}

/// Whether the container already has children that look like our entries
fn has_generated_entries(doc: &HtmlDocument) -> bool {
    let container = match doc.element_by_id(CONTAINER_ID) {
        Some(container) => container,
        None => return false,
    };

    doc.children(container).iter().any(|child| {
        doc.node(*child).element().map_or(false, |el| {
            el.attr("class")
                .map_or(false, |class| HEADING_TAGS.contains(&class))
        })
    })
}
