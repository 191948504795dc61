use super::Element;
use crate::node::{Fragment, Node};

/// A named grouping construct. Register the folder on a document first, then
/// route elements into it by name.
#[derive(Debug, Clone)]
pub struct Folder {
    name: String,
    description: Option<String>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Element for Folder {
    fn render(&self) -> Fragment {
        let mut folder = Node::new("Folder");
        folder.push(Node::text("name", self.name.clone()));
        if let Some(description) = &self.description {
            folder.push(Node::text("description", description.clone()));
        }
        Fragment::single(folder)
    }
}
