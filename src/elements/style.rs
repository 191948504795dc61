use super::Element;
use crate::node::{Fragment, Node};

/// A shared style defining the look of points, paths and polygons.
///
/// Each section (icon, line, poly) is a free-form ordered key/value list;
/// every entry becomes one child element whose tag is the key and whose text
/// is the value. The one exception is a key equal to `icon`
/// (case-insensitive) in the icon section, which expands to a nested
/// `<Icon><href>` instead of a flat element. A single style can serve more
/// than one element type; styles should be added to the document before the
/// elements that reference them.
#[derive(Debug, Clone, Default)]
pub struct Style {
    id: String,
    icon: Vec<(String, String)>,
    line: Vec<(String, String)>,
    poly: Vec<(String, String)>,
}

impl Style {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Adds an `<IconStyle>` entry.
    pub fn icon(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.icon.push((key.into(), value.into()));
        self
    }

    /// Adds a `<LineStyle>` entry.
    pub fn line(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.line.push((key.into(), value.into()));
        self
    }

    /// Adds a `<PolyStyle>` entry.
    pub fn poly(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.poly.push((key.into(), value.into()));
        self
    }
}

impl Element for Style {
    fn render(&self) -> Fragment {
        let mut style = Node::new("Style");
        style.set_attribute("id", &*self.id);

        if !self.icon.is_empty() {
            let mut icon_style = Node::new("IconStyle");
            for (key, value) in &self.icon {
                if key.eq_ignore_ascii_case("icon") {
                    let mut icon = Node::new("Icon");
                    icon.push(Node::text("href", value.clone()));
                    icon_style.push(icon);
                } else {
                    icon_style.push(Node::text(key.clone(), value.clone()));
                }
            }
            style.push(icon_style);
        }

        if !self.line.is_empty() {
            let mut line_style = Node::new("LineStyle");
            for (key, value) in &self.line {
                line_style.push(Node::text(key.clone(), value.clone()));
            }
            style.push(line_style);
        }

        if !self.poly.is_empty() {
            let mut poly_style = Node::new("PolyStyle");
            for (key, value) in &self.poly {
                poly_style.push(Node::text(key.clone(), value.clone()));
            }
            style.push(poly_style);
        }

        Fragment::single(style)
    }
}

/// A mapping from element state (normal, highlight) to a style reference.
///
/// Pair values are written to `<styleUrl>` verbatim; include the leading `#`
/// when referencing a style defined in the same document.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    id: String,
    pairs: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pairs: Vec::new(),
        }
    }

    pub fn pair(mut self, state: impl Into<String>, style_url: impl Into<String>) -> Self {
        self.pairs.push((state.into(), style_url.into()));
        self
    }
}

impl Element for StyleMap {
    fn render(&self) -> Fragment {
        let mut style_map = Node::new("StyleMap");
        style_map.set_attribute("id", &*self.id);

        for (state, style_url) in &self.pairs {
            let mut pair = Node::new("Pair");
            pair.push(Node::text("key", state.clone()));
            pair.push(Node::text("styleUrl", style_url.clone()));
            style_map.push(pair);
        }

        Fragment::single(style_map)
    }
}
