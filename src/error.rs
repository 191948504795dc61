//! Error handling types for document assembly and output.
//!
//! Expected conditions (a missing folder reference, a malformed input record)
//! are reported as error values the caller can inspect and choose to ignore;
//! I/O failures carry enough detail to be surfaced directly.

use std::{error::Error, fmt};

/// Main error type for KML building operations.
#[derive(Debug)]
pub struct KmlError {
    /// The specific kind of error
    kind: KmlErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum KmlErrorKind {
    Document(DocumentError),
    Input(InputError),
    Io(IoError),
}

/// Document assembly errors
#[derive(Debug, Clone)]
pub enum DocumentError {
    /// A folder with this name was already registered
    DuplicateFolder(String),
    /// Element routed to a folder name that was never registered
    MissingFolder(String),
    /// Fragment passed to folder registration holds no named Folder element
    NotAFolder,
}

/// Tabular input errors
#[derive(Debug, Clone)]
pub enum InputError {
    /// A record is missing an expected field
    MissingField(String),
    /// A record could not be read or decoded
    InvalidRecord(String),
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IoError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl KmlError {
    pub fn new(kind: KmlErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &KmlErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for KmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            KmlErrorKind::Document(err) => err.to_string(),
            KmlErrorKind::Input(err) => err.to_string(),
            KmlErrorKind::Io(err) => err.to_string(),
        };

        write!(f, "Error: {}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFolder(name) => {
                write!(f, "A folder named '{}' is already registered", name)
            }
            Self::MissingFolder(name) => {
                write!(f, "No folder named '{}'. Please create it first", name)
            }
            Self::NotAFolder => write!(f, "Fragment does not contain a named Folder element"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Record is missing field '{}'", field),
            Self::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for KmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(Box::as_ref)
    }
}

pub type Result<T> = std::result::Result<T, KmlError>;
