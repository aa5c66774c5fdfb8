//! Loading a point from a command-line input
//!
//! The input is either a file (GeoJSON, KML or an encoded blob) or a
//! literal `lon,lat[,alt]` coordinate.

use std::fs;
use std::path::Path;

use log::debug;

use crate::coordinate::GeoPoint;
use crate::errors::{KmlError, KmlResult};
use crate::geometry::KmlPoint;

/// Format a point was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    GeoJson,
    Kml,
    Blob,
    Coordinate,
}

/// Read a point from a file path or a literal coordinate
pub fn load_point(input: &str) -> KmlResult<(KmlPoint, InputFormat)> {
    if Path::new(input).is_file() {
        let data = fs::read(input)?;
        return parse_point_bytes(&data);
    }

    debug!("'{}' is not a file, reading it as a coordinate", input);
    let position = GeoPoint::from_lon_lat_str(input)?;
    Ok((KmlPoint::new(position), InputFormat::Coordinate))
}

/// Detect the format of raw input bytes and parse a point from them
pub fn parse_point_bytes(data: &[u8]) -> KmlResult<(KmlPoint, InputFormat)> {
    if data.starts_with(b"II") || data.starts_with(b"MM") {
        return Ok((KmlPoint::decode(data)?, InputFormat::Blob));
    }

    let text = std::str::from_utf8(data)
        .map_err(|e| KmlError::GenericError(format!("Input is neither text nor a point blob: {}", e)))?;
    let trimmed = text.trim_start();

    if trimmed.starts_with('{') {
        Ok((KmlPoint::from_geojson_str(trimmed)?, InputFormat::GeoJson))
    } else if trimmed.starts_with('<') {
        Ok((KmlPoint::from_kml(trimmed)?, InputFormat::Kml))
    } else {
        let position = GeoPoint::from_lon_lat_str(trimmed.trim_end())?;
        Ok((KmlPoint::new(position), InputFormat::Coordinate))
    }
}
