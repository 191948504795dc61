mod helpers;

pub use helpers::{sample_document, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    date::parse_date,
    document::KmlDocument,
    elements::{
        Element, Folder, GroundOverlay, Path, Placemark, Point, Polygon, Style, StyleMap, TimeSpan,
    },
    error::{DocumentError, InputError, IoError, KmlError, KmlErrorKind, Result},
    node::{Fragment, Node, NodeChild},
    reader::{read_records, read_records_with_delimiter, Record},
    utils::{print_kml, write_file, write_kml},
    writer::{Declaration, KmlWriter, WriteConfig},
};
