use super::{style_url_node, Element, TimeSpan};
use crate::node::{Fragment, Node};

/// A path (track) rendered as a `<LineString>`.
///
/// Latitudes and longitudes are parallel arrays; vertices are emitted in
/// input order as `"lon, lat, alt"` entries, altitude defaulting to 0 when no
/// altitude array is given.
#[derive(Debug, Clone)]
pub struct Path {
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    altitudes: Option<Vec<f64>>,
    extrude: i32,
    tessellate: i32,
    altitude_mode: String,
    span: Option<TimeSpan>,
    name: Option<String>,
    description: Option<String>,
    style: Option<String>,
}

impl Path {
    pub fn new(latitudes: Vec<f64>, longitudes: Vec<f64>) -> Self {
        Self {
            latitudes,
            longitudes,
            altitudes: None,
            extrude: 0,
            tessellate: 0,
            altitude_mode: "absolute".to_string(),
            span: None,
            name: None,
            description: None,
            style: None,
        }
    }

    /// Per-vertex altitudes. Must be at least as long as the coordinate
    /// arrays: rendering a shorter array panics with an index fault, by
    /// caller contract.
    pub fn altitudes(mut self, altitudes: Vec<f64>) -> Self {
        self.altitudes = Some(altitudes);
        self
    }

    /// Whether the path is extruded down to the ground (0 or 1).
    pub fn extrude(mut self, extrude: i32) -> Self {
        self.extrude = extrude;
        self
    }

    pub fn tessellate(mut self, tessellate: i32) -> Self {
        self.tessellate = tessellate;
        self
    }

    /// How altitude values are read
    /// (absolute|relativeToGround|relativeToSeaFloor|clampToGround|clampToSeaFloor).
    pub fn altitude_mode(mut self, mode: impl Into<String>) -> Self {
        self.altitude_mode = mode.into();
        self
    }

    pub fn time_span(mut self, span: TimeSpan) -> Self {
        self.span = Some(span);
        self
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
}

impl Element for Path {
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
        if let Some(span) = &self.span {
            pm.push(span.to_node());
        }

        let mut line = Node::new("LineString");
        line.push(Node::text("extrude", self.extrude.to_string()));
        line.push(Node::text("tessellate", self.tessellate.to_string()));
        line.push(Node::text("altitudeMode", self.altitude_mode.clone()));

        let mut coords = Node::new("coordinates");
        let vertices = self.latitudes.iter().zip(&self.longitudes);
        match &self.altitudes {
            None => {
                for (lat, lon) in vertices {
                    coords.push_text(format!("{}, {}, 0", lon, lat));
                }
            }
            Some(altitudes) => {
                for (i, (lat, lon)) in vertices.enumerate() {
                    coords.push_text(format!("{}, {}, {}", lon, lat, altitudes[i]));
                }
            }
        }
        line.push(coords);
        pm.push(line);

        Fragment::single(pm)
    }
}
