//! Document assembly: merging builder fragments into one KML tree.
//!
//! A [`KmlDocument`] owns the `<kml>` root with its single `<Document>`
//! container child. Fragments produced by the element builders are spliced
//! into the container in call order. Folders are registered before use;
//! registration records a handle (the folder node's index among the container
//! children) so later routing is a map lookup instead of a tree search. The
//! handle stays valid because children are only ever appended.

use std::collections::HashMap;

use crate::{
    error::{DocumentError, KmlError, KmlErrorKind, Result},
    node::{Fragment, Node, NodeChild},
};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// An assembled KML document tree.
#[derive(Debug, Clone)]
pub struct KmlDocument {
    root: Node,
    /// Folder name -> index of the Folder node among the container children.
    folders: HashMap<String, usize>,
}

impl KmlDocument {
    /// Creates a document with its container initialized and the title and
    /// description text nodes populated.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let mut container = Node::new("Document");
        container.push(Node::text("name", title));
        container.push(Node::text("description", description));

        let mut root = Node::new("kml");
        root.set_attribute("xmlns", KML_NAMESPACE);
        root.push(container);

        Self {
            root,
            folders: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The `<Document>` container node all fragments are merged under.
    pub fn container(&self) -> &Node {
        match self.root.children() {
            [NodeChild::Element(container), ..] => container,
            // The container is created in new() and never removed.
            _ => &self.root,
        }
    }

    fn container_mut(&mut self) -> &mut Node {
        // Probed immutably first so the mutable borrows below stay disjoint
        // per branch; the borrow checker rejects the direct match form.
        let has_container = matches!(self.root.children().first(), Some(NodeChild::Element(_)));
        if has_container {
            match self.root.child_element_mut(0) {
                Some(container) => container,
                // Guaranteed by the check above.
                None => unreachable!(),
            }
        } else {
            // Unreachable by construction; fall back to the root.
            &mut self.root
        }
    }

    /// Splices the fragment's nodes into the container. Repeated merges of
    /// equal fragments simply append; nothing is deduplicated.
    pub fn merge(&mut self, fragment: Fragment) {
        let nodes = fragment.into_nodes();
        let container = self.container_mut();
        for node in nodes {
            container.push(node);
        }
    }

    /// Merges several fragments in argument order. There is no rollback: if
    /// the caller aborts midway, prior merges stay applied.
    pub fn merge_all(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            self.merge(fragment);
        }
    }

    /// Merges a folder fragment and registers its declared name, read back
    /// out of the just-merged subtree's `<name>` child.
    ///
    /// Registering a second folder with an already-registered name is
    /// rejected: the first registration would shadow the second for all
    /// routing purposes, so the duplicate is reported instead of silently
    /// becoming unreachable.
    pub fn register_folder(&mut self, fragment: Fragment) -> Result<()> {
        let first_new = self.container().children().len();
        self.merge(fragment);

        let container = self.container();
        let merged = container
            .children()
            .iter()
            .enumerate()
            .skip(first_new)
            .find_map(|(index, child)| match child {
                NodeChild::Element(node) if node.tag() == "Folder" => {
                    node.child_text("name").map(|name| (index, name))
                }
                _ => None,
            });

        // A rejected registration must not leave the folder half-merged:
        // a name is registered if and only if its fragment is in the tree.
        let Some((index, name)) = merged else {
            self.container_mut().truncate_children(first_new);
            return Err(KmlError::new(KmlErrorKind::Document(
                DocumentError::NotAFolder,
            )));
        };

        if self.folders.contains_key(&name) {
            self.container_mut().truncate_children(first_new);
            return Err(KmlError::new(KmlErrorKind::Document(
                DocumentError::DuplicateFolder(name),
            )));
        }
        self.folders.insert(name, index);
        Ok(())
    }

    /// Appends the fragment's nodes under the named folder.
    ///
    /// The folder must have been registered first. An unknown name leaves the
    /// tree untouched and returns a `MissingFolder` error; callers decide
    /// whether that is a warning or a failure.
    pub fn merge_into_folder(&mut self, fragment: Fragment, folder_name: &str) -> Result<()> {
        let index = *self.folders.get(folder_name).ok_or_else(|| {
            KmlError::new(KmlErrorKind::Document(DocumentError::MissingFolder(
                folder_name.to_string(),
            )))
        })?;

        let nodes = fragment.into_nodes();
        let folder = self
            .container_mut()
            .child_element_mut(index)
            .ok_or_else(|| {
                KmlError::new(KmlErrorKind::Document(DocumentError::MissingFolder(
                    folder_name.to_string(),
                )))
            })?;
        for node in nodes {
            folder.push(node);
        }
        Ok(())
    }

    /// Whether a folder with this name has been registered.
    pub fn has_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    /// Registered folder names, in no particular order.
    pub fn folder_names(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Element, Folder, Point};

    #[test]
    fn new_document_has_title_and_description() {
        let doc = KmlDocument::new("T", "D");
        let container = doc.container();
        assert_eq!(container.tag(), "Document");
        assert_eq!(container.child_text("name").as_deref(), Some("T"));
        assert_eq!(container.child_text("description").as_deref(), Some("D"));
        assert_eq!(doc.root().attribute("xmlns"), Some(KML_NAMESPACE));
    }

    #[test]
    fn merge_appends_in_call_order() {
        let mut doc = KmlDocument::new("T", "");
        doc.merge(Fragment::single(Node::text("name", "first")));
        doc.merge(Fragment::single(Node::text("name", "second")));

        let children = doc.container().children();
        // name, description, then the two merged nodes
        assert_eq!(children.len(), 4);
    }

    #[test]
    fn merge_into_registered_folder_nests_the_fragment() {
        let mut doc = KmlDocument::new("T", "");
        doc.register_folder(Folder::new("Points").render())
            .unwrap();
        doc.merge_into_folder(Point::new(10.0, 20.0).render(), "Points")
            .unwrap();

        let folder = doc
            .container()
            .children()
            .iter()
            .find_map(|child| match child {
                NodeChild::Element(n) if n.tag() == "Folder" => Some(n),
                _ => None,
            })
            .unwrap();
        assert!(folder
            .children()
            .iter()
            .any(|child| matches!(child, NodeChild::Element(n) if n.tag() == "Placemark")));
    }

    #[test]
    fn merge_into_unknown_folder_is_rejected_and_tree_unchanged() {
        let mut doc = KmlDocument::new("T", "");
        let before = doc.clone();

        let result = doc.merge_into_folder(Point::new(1.0, 2.0).render(), "Unknown");
        match result.unwrap_err().kind() {
            KmlErrorKind::Document(DocumentError::MissingFolder(name)) => {
                assert_eq!(name, "Unknown");
            }
            other => panic!("Expected MissingFolder, got {:?}", other),
        }
        assert_eq!(doc.root(), before.root());
    }

    #[test]
    fn duplicate_folder_name_is_rejected() {
        let mut doc = KmlDocument::new("T", "");
        doc.register_folder(Folder::new("Points").render())
            .unwrap();

        let result = doc.register_folder(Folder::new("Points").render());
        match result.unwrap_err().kind() {
            KmlErrorKind::Document(DocumentError::DuplicateFolder(name)) => {
                assert_eq!(name, "Points");
            }
            other => panic!("Expected DuplicateFolder, got {:?}", other),
        }
    }

    #[test]
    fn register_requires_a_named_folder_element() {
        let mut doc = KmlDocument::new("T", "");
        let result = doc.register_folder(Fragment::single(Node::new("Placemark")));
        assert!(matches!(
            result.unwrap_err().kind(),
            KmlErrorKind::Document(DocumentError::NotAFolder)
        ));
    }
}
