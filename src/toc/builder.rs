use log::debug;

use crate::dom::Document;
use crate::toc::types::{
    synthesized_id, ScanScope, TocEntry, TocOptions, CONTAINER_ID, ENTRY_TAG, HEADING_TAGS,
};
use crate::utils::error::{TocError, TocResult};

/// Build a table of contents over the whole document.
///
/// Every h1-h6 element gets a `div` (classed with its tag name) holding a
/// link to it, appended to the element with id [`CONTAINER_ID`] in
/// document order. Headings without an id get `TableOfContents<index>`,
/// where index counts all scanned headings.
///
/// Nothing guards against running twice: existing entries are kept and a
/// second run appends a full second set.
pub fn build_table_of_contents<D: Document>(doc: &mut D) -> TocResult<Vec<TocEntry>> {
    build_table_of_contents_with(doc, &TocOptions::default())
}

/// Build a table of contents with explicit options
pub fn build_table_of_contents_with<D: Document>(
    doc: &mut D,
    options: &TocOptions,
) -> TocResult<Vec<TocEntry>> {
    // Resolved up front so a failure leaves the document untouched
    let container = doc
        .element_by_id(CONTAINER_ID)
        .ok_or_else(|| TocError::MissingContainer(CONTAINER_ID.to_string()))?;

    let scope = resolve_scope(&*doc, &options.scope)?;
    let headings = doc.query_all(scope, &HEADING_TAGS);
    debug!("Found {} heading(s) for the table of contents", headings.len());

    let mut entries = Vec::with_capacity(headings.len());

    for (index, heading) in headings.into_iter().enumerate() {
        let existing = doc
            .attribute(heading, "id")
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let assigned = existing.is_none();
        let id = match existing {
            Some(id) => id,
            None => {
                let id = synthesized_id(index);
                doc.set_attribute(heading, "id", &id);
                id
            }
        };

        let tag = doc
            .tag_name(heading)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let text = doc.text_content(heading);

        let link = doc.create_element("a");
        doc.set_attribute(link, "href", &format!("#{}", id));
        doc.set_text_content(link, &text);

        let block = doc.create_element(ENTRY_TAG);
        doc.set_attribute(block, "class", &tag);

        doc.append_child(block, link);
        doc.append_child(container, block);

        entries.push(TocEntry {
            tag,
            id,
            text,
            assigned,
        });
    }

    Ok(entries)
}

/// Resolve the configured scan scope to a query root (`None` = whole document)
fn resolve_scope<D: Document>(doc: &D, scope: &ScanScope) -> TocResult<Option<D::Handle>> {
    match scope {
        ScanScope::Document => Ok(None),
        ScanScope::Region(selector) => {
            let found = match selector.strip_prefix('#') {
                Some(id) => doc.element_by_id(id),
                None => doc.first_element_by_tag(selector),
            };

            found
                .map(Some)
                .ok_or_else(|| TocError::MissingRegion(selector.clone()))
        }
    }
}
