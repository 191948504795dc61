use super::Element;
use crate::node::{Fragment, Node};

/// An image draped over the ground, positioned by its bounding box.
#[derive(Debug, Clone)]
pub struct GroundOverlay {
    name: Option<String>,
    description: Option<String>,
    icon: String,
    north: f64,
    south: f64,
    east: f64,
    west: f64,
    rotation: f64,
}

impl GroundOverlay {
    /// `icon` is the URL of the overlay image; the four bounds are the
    /// latitudes (north/south) and longitudes (east/west) of the image edges.
    pub fn new(icon: impl Into<String>, north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            name: None,
            description: None,
            icon: icon.into(),
            north,
            south,
            east,
            west,
            rotation: 0.0,
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

    /// Rotation of the image's y-axis in degrees, clockwise. Defaults to 0.
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Element for GroundOverlay {
    fn render(&self) -> Fragment {
        let mut overlay = Node::new("GroundOverlay");

        if let Some(name) = &self.name {
            overlay.push(Node::text("name", name.clone()));
        }
        if let Some(description) = &self.description {
            overlay.push(Node::text("description", description.clone()));
        }

        let mut icon = Node::new("Icon");
        icon.push(Node::text("href", self.icon.clone()));
        overlay.push(icon);

        let mut lat_lon_box = Node::new("LatLonBox");
        lat_lon_box.push(Node::text("north", self.north.to_string()));
        lat_lon_box.push(Node::text("south", self.south.to_string()));
        lat_lon_box.push(Node::text("east", self.east.to_string()));
        lat_lon_box.push(Node::text("west", self.west.to_string()));
        lat_lon_box.push(Node::text("rotation", self.rotation.to_string()));
        overlay.push(lat_lon_box);

        Fragment::single(overlay)
    }
}
