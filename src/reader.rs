//! Tabular input collaborator.
//!
//! The document core only ever sees an ordered sequence of field -> value
//! records; how they got out of a CSV file is this module's concern alone.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::error::{InputError, IoError, KmlError, KmlErrorKind, Result};

/// One input row, keyed by header field name.
pub type Record = HashMap<String, String>;

/// Reads a comma-delimited file into an ordered sequence of records.
pub fn read_records(path: &str) -> Result<Vec<Record>> {
    read_records_with_delimiter(path, b',')
}

/// Reads a delimited file into an ordered sequence of records. The first row
/// is taken as the header.
#[instrument]
pub fn read_records_with_delimiter(path: &str, delimiter: u8) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| map_csv_error(e, path))?;

    let headers = reader
        .headers()
        .map_err(|e| map_csv_error(e, path))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            KmlError::new(KmlErrorKind::Input(InputError::InvalidRecord(
                e.to_string(),
            )))
        })?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        records.push(record);
    }

    debug!("Read {} records from {}", records.len(), path);
    Ok(records)
}

fn map_csv_error(error: csv::Error, path: &str) -> KmlError {
    match error.kind() {
        csv::ErrorKind::Io(io) => match io.kind() {
            std::io::ErrorKind::NotFound => {
                KmlError::new(KmlErrorKind::Io(IoError::FileNotFound(path.to_string())))
            }
            std::io::ErrorKind::PermissionDenied => {
                KmlError::new(KmlErrorKind::Io(IoError::PermissionDenied(path.to_string())))
            }
            _ => KmlError::new(KmlErrorKind::Io(IoError::ReadError(error.to_string()))),
        },
        _ => KmlError::new(KmlErrorKind::Input(InputError::InvalidRecord(
            error.to_string(),
        ))),
    }
}
