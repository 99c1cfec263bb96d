use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::dom::document::HtmlDocument;
use crate::dom::types::{NodeId, NodeKind};

lazy_static! {
    static ref VOID_ELEMENTS: HashSet<&'static str> = [
        "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img",
        "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
    ]
    .into_iter()
    .collect();

    // Children of these are emitted verbatim
    static ref RAW_TEXT_ELEMENTS: HashSet<&'static str> = [
        "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
    ]
    .into_iter()
    .collect();
}

impl HtmlDocument {
    /// Serialize the whole document back to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.root()) {
            self.write_node(&mut out, *child, false);
        }
        out
    }

    /// Serialize one node and its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id, false);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, raw_text: bool) {
        match &self.node(id).kind {
            NodeKind::Document => {
                for child in self.children(id) {
                    self.write_node(out, *child, false);
                }
            }
            NodeKind::Doctype {
                name,
                public_id,
                system_id,
            } => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                // public/system identifiers select quirks mode in browsers
                if !public_id.is_empty() {
                    out.push_str(" PUBLIC \"");
                    out.push_str(public_id);
                    out.push('"');
                    if !system_id.is_empty() {
                        out.push_str(" \"");
                        out.push_str(system_id);
                        out.push('"');
                    }
                } else if !system_id.is_empty() {
                    out.push_str(" SYSTEM \"");
                    out.push_str(system_id);
                    out.push('"');
                }
                out.push('>');
            }
            NodeKind::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeKind::Text(text) => {
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&html_escape::encode_text(text));
                }
            }
            NodeKind::Element(element) => {
                out.push('<');
                out.push_str(&element.name);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(element.name.as_str()) {
                    return;
                }

                // The parser drops one newline right after these start tags
                if matches!(element.name.as_str(), "pre" | "textarea" | "listing")
                    && self.starts_with_newline(id)
                {
                    out.push('\n');
                }

                let raw = RAW_TEXT_ELEMENTS.contains(element.name.as_str());
                for child in self.children(id) {
                    self.write_node(out, *child, raw);
                }

                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }

    fn starts_with_newline(&self, id: NodeId) -> bool {
        match self.children(id).first() {
            Some(first) => matches!(&self.node(*first).kind, NodeKind::Text(text) if text.starts_with('\n')),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{Document, HtmlDocument};

    #[test]
    fn test_serialize_keeps_structure() {
        let doc = HtmlDocument::parse(
            "<!DOCTYPE html><html><head></head><body><p class=\"x\">Hi<br>there</p><!-- note --></body></html>",
        );

        assert_eq!(
            doc.to_html(),
            "<!DOCTYPE html><html><head></head><body><p class=\"x\">Hi<br>there</p><!-- note --></body></html>"
        );
    }

    #[test]
    fn test_serialize_escapes_text_but_not_scripts() {
        let doc = HtmlDocument::parse(
            "<html><head><script>if (a < b && c) {}</script></head><body><p>a &lt; b &amp; c</p></body></html>",
        );
        let html = doc.to_html();

        assert!(html.contains("<script>if (a < b && c) {}</script>"));
        assert!(html.contains("<p>a &lt; b &amp; c</p>"));
    }

    #[test]
    fn test_serialize_escapes_attribute_quotes() {
        let mut doc = HtmlDocument::parse("<p>x</p>");
        let p = doc.first_element_by_tag("p").unwrap();
        doc.set_attribute(p, "title", "say \"hi\"");

        let html = doc.outer_html(p);
        assert!(!html.contains("\"hi\""));
        assert!(html.starts_with("<p title=\""));
    }

    fn reserialize(html: &str) -> String {
        HtmlDocument::parse(html).to_html()
    }

    #[test]
    fn test_leading_newline_in_pre_survives_round_trips() {
        let source = "<html><head></head><body><pre>\n\ncode</pre><textarea>\n\nnote</textarea></body></html>";

        let once = reserialize(source);
        let twice = reserialize(&once);

        assert!(once.contains("<pre>\n\ncode</pre>"));
        assert!(once.contains("<textarea>\n\nnote</textarea>"));
        assert_eq!(once, twice);

        let pre = HtmlDocument::parse(&twice);
        let node = pre.first_element_by_tag("pre").unwrap();
        assert_eq!(pre.text_content(node), "\ncode");
    }

    #[test]
    fn test_namespaced_svg_attributes_survive() {
        let source = concat!(
            "<html><head></head><body>",
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"></use></svg>"##,
            "</body></html>"
        );

        let html = reserialize(source);

        assert!(html.contains(
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"></use></svg>"##
        ));
        assert_eq!(reserialize(&html), html);
    }

    #[test]
    fn test_legacy_doctype_is_kept() {
        let doctype = concat!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "#,
            r#""http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#
        );
        let source = format!("{}<html><head></head><body></body></html>", doctype);

        let html = reserialize(&source);

        assert!(html.starts_with(doctype));
        assert_eq!(reserialize(&html), html);
    }

    #[test]
    fn test_system_only_doctype() {
        let html = reserialize(r#"<!DOCTYPE html SYSTEM "about:legacy-compat"><p>x</p>"#);

        assert!(html.starts_with(r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#));
    }
}
