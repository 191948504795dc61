use std::fs;

use tracing::{debug, info, instrument};

use crate::{
    document::KmlDocument,
    error::{IoError, KmlError, KmlErrorKind, Result},
    writer::{Declaration, KmlWriter},
};

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => KmlError::new(KmlErrorKind::Io(
            IoError::PermissionDenied(path.to_string()),
        )),
        _ => KmlError::new(KmlErrorKind::Io(IoError::WriteError(e.to_string()))),
    })
}

/// Renders a document and writes it to a file, overwriting any previous
/// content. The file gets the UTF-8 XML declaration.
#[instrument(skip(document))]
pub fn write_kml(document: &KmlDocument, path: &str) -> Result<()> {
    debug!("Rendering document for {}", path);
    let text = KmlWriter::new().render_document(document, Declaration::Utf8);
    write_file(path, &text)?;
    info!("Wrote KML document to {}", path);
    Ok(())
}

/// Renders a document and prints it to stdout, without the encoding
/// declaration.
pub fn print_kml(document: &KmlDocument) {
    let text = KmlWriter::new().render_document(document, Declaration::Bare);
    println!("{}", text);
}
