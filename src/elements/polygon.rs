use super::{style_url_node, Element};
use crate::node::{Fragment, Node};

/// A two- or three-dimensional shape, on or above the ground.
///
/// The coordinate input is one newline-delimited string; every line becomes
/// one verbatim entry in the single outer boundary ring. No re-formatting and
/// no reordering is applied. Holes (inner rings) are not supported.
#[derive(Debug, Clone)]
pub struct Polygon {
    name: Option<String>,
    description: Option<String>,
    coordinates: String,
    style: Option<String>,
    extrude: i32,
    altitude_mode: String,
}

impl Polygon {
    /// `coordinates` is a newline-delimited list of
    /// `longitude, latitude, altitude` lines.
    pub fn new(coordinates: impl Into<String>) -> Self {
        Self {
            name: None,
            description: None,
            coordinates: coordinates.into(),
            style: None,
            extrude: 1,
            altitude_mode: "relativeToGround".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn style_url(mut self, style_id: impl Into<String>) -> Self {
        self.style = Some(style_id.into());
        self
    }

    pub fn extrude(mut self, extrude: i32) -> Self {
        self.extrude = extrude;
        self
    }

    pub fn altitude_mode(mut self, mode: impl Into<String>) -> Self {
        self.altitude_mode = mode.into();
        self
    }
}

impl Element for Polygon {
    fn render(&self) -> Fragment {
        let mut pm = Node::new("Placemark");

        if let Some(name) = &self.name {
            pm.push(Node::text("name", name.clone()));
        }
        if let Some(style) = &self.style {
            pm.push(style_url_node(style));
        }
        if let Some(description) = &self.description {
            pm.push(Node::text("description", description.clone()));
        }

        let mut polygon = Node::new("Polygon");
        polygon.push(Node::text("extrude", self.extrude.to_string()));
        polygon.push(Node::text("altitudeMode", self.altitude_mode.clone()));

        let mut ring = Node::new("LinearRing");
        let mut coords = Node::new("coordinates");
        for line in self.coordinates.split('\n') {
            coords.push_text(line);
        }
        ring.push(coords);

        let mut boundary = Node::new("outerBoundaryIs");
        boundary.push(ring);
        polygon.push(boundary);
        pm.push(polygon);

        Fragment::single(pm)
    }
}
