use log::trace;
use scraper::{ElementRef, Html, Node};

use crate::dom::traits::Document;
use crate::dom::types::{ElementData, NodeData, NodeId, NodeKind};

const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// A mutable HTML tree stored as an arena of nodes.
///
/// Parsing goes through scraper (html5ever), so the tree has the shape a
/// browser would build: `html`, `head` and `body` always exist, stray
/// headings in `head` are moved to `body`, and so on.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    nodes: Vec<NodeData>,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlDocument {
    /// An empty document holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
        }
    }

    /// Parse a complete HTML document
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut doc = Self::new();
        let root = doc.root();

        for child in parsed.tree.root().children() {
            match child.value() {
                Node::Doctype(doctype) => {
                    let id = doc.push(NodeKind::Doctype {
                        name: doctype.name().to_string(),
                        public_id: doctype.public_id().to_string(),
                        system_id: doctype.system_id().to_string(),
                    });
                    doc.attach(root, id);
                }
                Node::Comment(comment) => {
                    let content: &str = comment;
                    let id = doc.push(NodeKind::Comment(content.to_string()));
                    doc.attach(root, id);
                }
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        doc.copy_element(root, element);
                    }
                }
                _ => {}
            }
        }

        trace!("Parsed document into {} nodes", doc.nodes.len());
        doc
    }

    fn copy_element(&mut self, parent: NodeId, element: ElementRef<'_>) {
        let source = element.value();
        let mut data = ElementData::new(source.name());
        for (qual, value) in source.attrs.iter() {
            let local: &str = &qual.local;
            let name = match attribute_prefix(&qual.ns, local) {
                Some(prefix) => format!("{}:{}", prefix, local),
                None => local.to_string(),
            };
            let value: &str = value;
            data.attrs.push((name, value.to_string()));
        }

        let id = self.push(NodeKind::Element(data));
        self.attach(parent, id);

        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    let content: &str = text;
                    let text_id = self.push(NodeKind::Text(content.to_string()));
                    self.attach(id, text_id);
                }
                Node::Comment(comment) => {
                    let content: &str = comment;
                    let comment_id = self.push(NodeKind::Comment(content.to_string()));
                    self.attach(id, comment_id);
                }
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        self.copy_element(id, child_element);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn body(&self) -> Option<NodeId> {
        self.first_element_by_tag("body")
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Connected nodes below `from` in pre-order, `from` excluded
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(from).iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }

        out
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    fn find_element<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        self.descendants(self.root())
            .into_iter()
            .find(|id| self.nodes[id.0].element().map_or(false, |el| predicate(el)))
    }
}

/// Prefix to put back on a foreign-content attribute, from its namespace
fn attribute_prefix(namespace: &str, local: &str) -> Option<&'static str> {
    match namespace {
        XLINK_NAMESPACE => Some("xlink"),
        XML_NAMESPACE => Some("xml"),
        // a bare `xmlns` lives in the xmlns namespace but has no prefix
        XMLNS_NAMESPACE if local != "xmlns" => Some("xmlns"),
        _ => None,
    }
}

impl Document for HtmlDocument {
    type Handle = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element(|el| el.id() == Some(id))
    }

    fn first_element_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find_element(|el| el.name.eq_ignore_ascii_case(tag))
    }

    fn query_all(&self, scope: Option<NodeId>, tags: &[&str]) -> Vec<NodeId> {
        let from = scope.unwrap_or_else(|| self.root());

        self.descendants(from)
            .into_iter()
            .filter(|id| {
                self.nodes[id.0]
                    .element()
                    .map_or(false, |el| tags.iter().any(|tag| el.name.eq_ignore_ascii_case(tag)))
            })
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].element().map(|el| el.name.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].element().and_then(|el| el.attr(name))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.nodes[node.0].element_mut() {
            el.set_attr(name, value);
        }
    }

    fn text_content(&self, node: NodeId) -> String {
        if let NodeKind::Text(text) = &self.nodes[node.0].kind {
            return text.clone();
        }

        self.descendants(node)
            .into_iter()
            .filter_map(|id| match &self.nodes[id.0].kind {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(tag)))
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        if let NodeKind::Text(existing) = &mut self.nodes[node.0].kind {
            *existing = text.to_string();
            return;
        }

        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }

        if !text.is_empty() {
            let text_id = self.create_text(text);
            self.attach(node, text_id);
        }
    }

    /// Appending a node into itself or one of its own descendants is ignored.
    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.is_ancestor_or_self(child, parent) {
            log::warn!("Refusing to append node {:?} into its own subtree", child);
            return;
        }
        self.attach(parent, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>T</title></head>
<body>
<nav id="toc"></nav>
<article><h1 id="top">Title <em>here</em></h1><p>x</p><h2>Sub</h2></article>
<h3>Outside</h3>
</body></html>"#;

    #[test]
    fn test_parse_builds_browser_shape() {
        let doc = HtmlDocument::parse("<h1>Only</h1>");

        assert!(doc.first_element_by_tag("html").is_some());
        assert!(doc.first_element_by_tag("head").is_some());
        let body = doc.body().unwrap();
        let h1 = doc.first_element_by_tag("h1").unwrap();
        assert_eq!(doc.parent(h1), Some(body));
    }

    #[test]
    fn test_query_all_is_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let found = doc.query_all(None, &["h1", "h2", "h3"]);
        let tags: Vec<&str> = found.iter().map(|id| doc.tag_name(*id).unwrap()).collect();

        assert_eq!(tags, vec!["h1", "h2", "h3"]);
    }

    #[test]
    fn test_query_all_with_scope() {
        let doc = HtmlDocument::parse(PAGE);
        let article = doc.first_element_by_tag("article").unwrap();
        let found = doc.query_all(Some(article), &["h1", "h2", "h3"]);

        assert_eq!(found.len(), 2);
        assert_eq!(doc.tag_name(found[1]), Some("h2"));
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let doc = HtmlDocument::parse(PAGE);
        let h1 = doc.element_by_id("top").unwrap();

        assert_eq!(doc.text_content(h1), "Title here");
    }

    #[test]
    fn test_element_by_id_ignores_detached_nodes() {
        let mut doc = HtmlDocument::parse(PAGE);
        let detached = doc.create_element("div");
        doc.set_attribute(detached, "id", "ghost");

        assert_eq!(doc.element_by_id("ghost"), None);

        let body = doc.body().unwrap();
        doc.append_child(body, detached);
        assert_eq!(doc.element_by_id("ghost"), Some(detached));
    }

    #[test]
    fn test_append_child_moves_node() {
        let mut doc = HtmlDocument::parse(PAGE);
        let toc = doc.element_by_id("toc").unwrap();
        let h3 = doc.first_element_by_tag("h3").unwrap();
        let old_parent = doc.parent(h3).unwrap();

        doc.append_child(toc, h3);

        assert_eq!(doc.parent(h3), Some(toc));
        assert!(!doc.children(old_parent).contains(&h3));
    }

    #[test]
    fn test_append_child_rejects_cycles() {
        let mut doc = HtmlDocument::parse(PAGE);
        let article = doc.first_element_by_tag("article").unwrap();
        let h1 = doc.element_by_id("top").unwrap();

        doc.append_child(h1, article);

        assert_ne!(doc.parent(article), Some(h1));
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let mut doc = HtmlDocument::parse(PAGE);
        let h1 = doc.element_by_id("top").unwrap();

        doc.set_text_content(h1, "Plain");

        assert_eq!(doc.children(h1).len(), 1);
        assert_eq!(doc.text_content(h1), "Plain");
        assert!(doc.first_element_by_tag("em").is_none());
    }
}
