//! Builders for the KML constructs a document can contain.
//!
//! Each builder captures its domain fields at construction time and renders a
//! standalone [`Fragment`] on demand. Builders perform no validation:
//! out-of-range coordinates or malformed values pass straight through into
//! the output text. Optional fields suppress their child element entirely
//! when unset.

mod folder;
mod ground_overlay;
mod path;
mod placemark;
mod point;
mod polygon;
mod style;

pub use self::{
    folder::Folder,
    ground_overlay::GroundOverlay,
    path::Path,
    placemark::Placemark,
    point::Point,
    polygon::Polygon,
    style::{Style, StyleMap},
};

use crate::node::{Fragment, Node};

/// A KML construct that can render itself as a document fragment.
pub trait Element {
    fn render(&self) -> Fragment;
}

/// A start/end interval annotation attached to a placemark.
///
/// The end date is optional; an open-ended span only declares when its
/// subject appears.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpan {
    begin: String,
    end: Option<String>,
}

impl TimeSpan {
    pub fn new(begin: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: None,
        }
    }

    pub fn ending(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub(crate) fn to_node(&self) -> Node {
        let mut span = Node::new("TimeSpan");
        span.push(Node::text("begin", self.begin.clone()));
        if let Some(end) = &self.end {
            span.push(Node::text("end", end.clone()));
        }
        span
    }
}

/// `<styleUrl>#id</styleUrl>` — placemarks reference shared styles by id.
pub(crate) fn style_url_node(style_id: &str) -> Node {
    Node::text("styleUrl", format!("#{}", style_id))
}
