//! kmlwrite: a builder and pretty-printing writer for KML documents
//!
//! This crate provides functionality to:
//! - Build KML element trees (points, paths, polygons, overlays, styles)
//! - Assemble independently built fragments into one document
//! - Route elements into named folders registered on the document
//! - Serialize the assembled tree as indented, Google-Earth-friendly XML
//!
//! # Examples
//! ```no_run
//! use kmlwrite::{write_kml, Element, Folder, KmlDocument, Point, Result};
//!
//! fn example() -> Result<()> {
//!     let mut doc = KmlDocument::new("My places", "");
//!     doc.register_folder(Folder::new("Points").render())?;
//!     let point = Point::new(51.5, -0.12).name("London");
//!     doc.merge_into_folder(point.render(), "Points")?;
//!     write_kml(&doc, "places.kml")
//! }
//! ```

pub mod date;
pub mod document;
pub mod elements;
pub mod error;
pub mod node;
pub mod reader;
pub mod test_utils;
pub mod utils;
pub mod writer;

// Re-exports
pub use date::parse_date;
pub use document::KmlDocument;
pub use elements::{
    Element, Folder, GroundOverlay, Path, Placemark, Point, Polygon, Style, StyleMap, TimeSpan,
};
pub use error::{DocumentError, InputError, IoError, KmlError, KmlErrorKind, Result};
pub use node::{Fragment, Node, NodeChild};
pub use utils::{print_kml, write_kml};
pub use writer::{Declaration, KmlWriter, WriteConfig};
