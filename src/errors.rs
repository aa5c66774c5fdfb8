//! Custom error types for KML/GeoJSON geometry processing

use std::fmt;
use std::io;

/// Geometry error types
#[derive(Debug)]
pub enum KmlError {
    /// Position requested from a geometry that never received a coordinate
    MissingCoordinate,
    /// Writing KML text to the sink failed
    SinkWrite(io::Error),
    /// Any other I/O error
    Io(io::Error),
    /// GeoJSON text is not valid JSON
    Json(serde_json::Error),
    /// KML text is not well-formed XML
    Xml(String),
    /// Invalid byte order marker in an encoded geometry
    InvalidByteOrder(u16),
    /// Unsupported encoded geometry version
    UnsupportedVersion(u8),
    /// Unknown or inconsistent flags in an encoded geometry
    InvalidFlags(u8),
    /// Coordinate text could not be understood
    InvalidCoordinate(String),
    /// Configuration file problem
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for KmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmlError::MissingCoordinate => write!(f, "Geometry has no coordinate"),
            KmlError::SinkWrite(e) => write!(f, "Failed to write KML: {}", e),
            KmlError::Io(e) => write!(f, "I/O error: {}", e),
            KmlError::Json(e) => write!(f, "Invalid GeoJSON: {}", e),
            KmlError::Xml(msg) => write!(f, "Invalid KML: {}", msg),
            KmlError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            KmlError::UnsupportedVersion(v) => write!(f, "Unsupported encoding version: {}", v),
            KmlError::InvalidFlags(v) => write!(f, "Invalid encoding flags: {:#04x}", v),
            KmlError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            KmlError::Config(msg) => write!(f, "Configuration error: {}", msg),
            KmlError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for KmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmlError::SinkWrite(e) | KmlError::Io(e) => Some(e),
            KmlError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for KmlError {
    fn from(error: io::Error) -> Self {
        KmlError::Io(error)
    }
}

impl From<serde_json::Error> for KmlError {
    fn from(error: serde_json::Error) -> Self {
        KmlError::Json(error)
    }
}

impl From<quick_xml::Error> for KmlError {
    fn from(error: quick_xml::Error) -> Self {
        KmlError::Xml(error.to_string())
    }
}

impl From<String> for KmlError {
    fn from(msg: String) -> Self {
        KmlError::GenericError(msg)
    }
}

/// Result type for geometry operations
pub type KmlResult<T> = Result<T, KmlError>;
