//! Pretty-printing XML writer for assembled documents.
//!
//! The writer walks a [`Node`] tree depth-first and renders indented text.
//! Two formatting rules depart from a naive walk and exist for Google Earth
//! compatibility:
//!
//! - attributes are emitted sorted by key, so output is deterministic no
//!   matter the order they were set in;
//! - an element whose entire child list is a single text leaf collapses onto
//!   one line (`<name>Track</name>`), while its siblings keep full
//!   indentation.
//!
//! The writer is a plain value passed to the render call; it never mutates
//! any shared or global serializer state.

use crate::{
    document::KmlDocument,
    node::{Node, NodeChild},
};

/// Configuration options for the writer.
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// String prepended once per nesting level
    pub indent: String,
    /// Line terminator
    pub newline: String,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            newline: "\n".to_string(),
        }
    }
}

/// XML declaration variants for the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// `<?xml version="1.0"?>` — used when printing to a console
    Bare,
    /// `<?xml version="1.0" encoding="UTF-8"?>` — used when writing a file
    Utf8,
}

impl Declaration {
    fn as_str(self) -> &'static str {
        match self {
            Self::Bare => "<?xml version=\"1.0\"?>",
            Self::Utf8 => "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
        }
    }
}

/// Renders a node tree as pretty-printed XML text.
#[derive(Debug, Clone, Default)]
pub struct KmlWriter {
    config: WriteConfig,
}

impl KmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: WriteConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders a whole document, prepending the XML declaration.
    pub fn render_document(&self, document: &KmlDocument, declaration: Declaration) -> String {
        let mut out = String::new();
        out.push_str(declaration.as_str());
        out.push_str(&self.config.newline);
        self.write_node(document.root(), 0, &mut out);
        out
    }

    /// Renders a bare node tree without a declaration.
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        out
    }

    fn write_node(&self, node: &Node, depth: usize, out: &mut String) {
        self.push_indent(depth, out);
        out.push('<');
        out.push_str(node.tag());

        let mut attributes: Vec<_> = node.attributes().iter().collect();
        attributes.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (key, value) in attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }

        match node.children() {
            [] => {
                out.push_str("/>");
                out.push_str(&self.config.newline);
            }
            [NodeChild::Text(text)] => {
                // Sole-text-child elements collapse onto one line.
                out.push('>');
                out.push_str(&escape_text(text));
                out.push_str("</");
                out.push_str(node.tag());
                out.push('>');
                out.push_str(&self.config.newline);
            }
            children => {
                out.push('>');
                out.push_str(&self.config.newline);
                for child in children {
                    match child {
                        NodeChild::Element(element) => {
                            self.write_node(element, depth + 1, out);
                        }
                        NodeChild::Text(text) => {
                            self.push_indent(depth + 1, out);
                            out.push_str(&escape_text(text));
                            out.push_str(&self.config.newline);
                        }
                    }
                }
                self.push_indent(depth, out);
                out.push_str("</");
                out.push_str(node.tag());
                out.push('>');
                out.push_str(&self.config.newline);
            }
        }
    }

    fn push_indent(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(&self.config.indent);
        }
    }
}

/// Escapes character data for element content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes an attribute value; quotes must be escaped too since values are
/// always double-quoted.
fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
