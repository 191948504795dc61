use std::{env, fs, path::PathBuf};

use crate::{
    document::KmlDocument,
    elements::{Element, Folder, Point, Style},
};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("kmlwrite_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// A small document with a style, a folder and one point inside it.
pub fn sample_document() -> KmlDocument {
    let mut doc = KmlDocument::new("Sample", "Fixture document");
    doc.merge(
        Style::new("pointStyle")
            .icon("icon", "http://example.com/icon.png")
            .render(),
    );
    let _ = doc.register_folder(Folder::new("Points").render());
    let point = Point::new(51.5, -0.12)
        .name("London")
        .style_url("pointStyle");
    let _ = doc.merge_into_folder(point.render(), "Points");
    doc
}
