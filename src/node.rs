//! Element tree model shared by the builders, the assembler and the writer.
//!
//! A [`Node`] is an owned XML-style element: a tag name, ordered attributes
//! with unique keys, and an ordered list of children that are either nested
//! elements or text leaves. Builders produce [`Fragment`]s — standalone node
//! lists that are not part of any document until merged.

use std::fmt;

/// A child of an element: either a nested element or a text leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChild {
    Element(Node),
    Text(String),
}

/// An owned element in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeChild>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element whose only child is a text leaf,
    /// e.g. `<name>My track</name>`.
    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = Self::new(tag);
        node.push_text(text);
        node
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order. The writer sorts them by key at
    /// render time; the stored order is irrelevant to the output.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[NodeChild] {
        &self.children
    }

    /// Sets an attribute. Re-setting an existing key overwrites its value
    /// rather than adding a duplicate.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a child element. Children keep insertion order; that order is
    /// meaningful and survives serialization.
    pub fn push(&mut self, child: Node) {
        self.children.push(NodeChild::Element(child));
    }

    /// Appends a text leaf.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(NodeChild::Text(text.into()));
    }

    pub(crate) fn truncate_children(&mut self, len: usize) {
        self.children.truncate(len);
    }

    pub(crate) fn child_element_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self.children.get_mut(index) {
            Some(NodeChild::Element(node)) => Some(node),
            _ => None,
        }
    }

    /// Concatenated text of the element's direct text children.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let NodeChild::Text(text) = child {
                out.push_str(text);
            }
        }
        out
    }

    /// Text content of the first direct child element with the given tag.
    pub fn child_text(&self, tag: &str) -> Option<String> {
        self.children.iter().find_map(|child| match child {
            NodeChild::Element(node) if node.tag == tag => Some(node.text_content()),
            _ => None,
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        if self.children.is_empty() {
            write!(f, "/>")
        } else {
            write!(f, ">...</{}>", self.tag)
        }
    }
}

/// A standalone subtree produced by an element builder.
///
/// The fragment itself plays the role of the builder's top-level wrapper: it
/// is discarded when the fragment is merged into a document, and only the
/// nodes it carries attach to the container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(node: Node) -> Self {
        Self { nodes: vec![node] }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_overwrites_existing_key() {
        let mut node = Node::new("Style");
        node.set_attribute("id", "first");
        node.set_attribute("id", "second");

        assert_eq!(node.attributes().len(), 1);
        assert_eq!(node.attribute("id"), Some("second"));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut node = Node::new("Document");
        node.push(Node::text("name", "a"));
        node.push(Node::text("name", "b"));
        node.push_text("tail");

        let tags: Vec<_> = node
            .children()
            .iter()
            .map(|c| match c {
                NodeChild::Element(n) => n.text_content(),
                NodeChild::Text(t) => t.clone(),
            })
            .collect();
        assert_eq!(tags, vec!["a", "b", "tail"]);
    }

    #[test]
    fn child_text_finds_first_matching_element() {
        let mut node = Node::new("Folder");
        node.push(Node::text("name", "Points"));
        node.push(Node::text("name", "Shadowed"));

        assert_eq!(node.child_text("name").as_deref(), Some("Points"));
        assert_eq!(node.child_text("description"), None);
    }
}
