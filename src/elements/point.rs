use super::{style_url_node, Element, TimeSpan};
use crate::node::{Fragment, Node};

/// A single point or push pin.
///
/// The description balloon is always emitted, even when empty; Google Earth
/// treats a missing description differently from an empty one. A point may
/// carry either an instant annotation ([`timestamp`](Self::timestamp)) or an
/// interval ([`time_span`](Self::time_span)); if both are set, the instant
/// wins and the interval is ignored.
#[derive(Debug, Clone)]
pub struct Point {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
    description: String,
    style: Option<String>,
    timestamp: Option<String>,
    span: Option<TimeSpan>,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
            description: String::new(),
            style: None,
            timestamp: None,
            span: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Description balloon content; may contain HTML.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Id of a style registered on the document.
    pub fn style_url(mut self, style_id: impl Into<String>) -> Self {
        self.style = Some(style_id.into());
        self
    }

    /// Instant annotation (`<TimeStamp>`). Tightly sampled timestamps across
    /// many points produce an animation.
    pub fn timestamp(mut self, when: impl Into<String>) -> Self {
        self.timestamp = Some(when.into());
        self
    }

    /// Interval annotation (`<TimeSpan>`).
    pub fn time_span(mut self, span: TimeSpan) -> Self {
        self.span = Some(span);
        self
    }
}

impl Element for Point {
    fn render(&self) -> Fragment {
        let mut pm = Node::new("Placemark");

        if let Some(name) = &self.name {
            pm.push(Node::text("name", name.clone()));
        }
        if let Some(style) = &self.style {
            pm.push(style_url_node(style));
        }
        pm.push(Node::text("description", self.description.clone()));

        let mut point = Node::new("Point");
        point.push(Node::text(
            "coordinates",
            format!("{}, {}, 0", self.longitude, self.latitude),
        ));
        pm.push(point);

        // Instant-first: an interval is only considered when no instant is set.
        if let Some(when) = &self.timestamp {
            let mut stamp = Node::new("TimeStamp");
            stamp.push(Node::text("when", when.clone()));
            pm.push(stamp);
        } else if let Some(span) = &self.span {
            pm.push(span.to_node());
        }

        Fragment::single(pm)
    }
}
