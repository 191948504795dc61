use super::Element;
use crate::node::{Fragment, Node};

/// A placemark with no geometry. It never shows on the map; it carries a
/// name and a description balloon only.
#[derive(Debug, Clone, Default)]
pub struct Placemark {
    name: Option<String>,
    description: String,
}

impl Placemark {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Element for Placemark {
    fn render(&self) -> Fragment {
        let mut pm = Node::new("Placemark");
        if let Some(name) = &self.name {
            pm.push(Node::text("name", name.clone()));
        }
        pm.push(Node::text("description", self.description.clone()));
        Fragment::single(pm)
    }
}
