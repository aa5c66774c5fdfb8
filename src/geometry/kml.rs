//! KML coordinate sub-grammar
//!
//! KML writes positions as whitespace-separated `lon,lat[,alt]` tuples
//! inside a `<coordinates>` element.

use std::io::{self, Write};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::GeoPoint;

lazy_static! {
    static ref COORDINATE_TUPLE: Regex = Regex::new(r"(?x)
        ^([-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)        # longitude
        ,([-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)        # latitude
        (?:,([-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?))?$  # altitude
    ").unwrap();
}

/// Format one position as a KML tuple
///
/// `f64` display never uses exponent notation and always uses `.` as the
/// decimal separator.
pub fn format_kml_tuple(position: &GeoPoint) -> String {
    match position.altitude {
        Some(altitude) => format!("{},{},{}", position.longitude, position.latitude, altitude),
        None => format!("{},{}", position.longitude, position.latitude),
    }
}

/// Write a `<coordinates>` element followed by a newline
pub fn write_kml_coordinates(writer: &mut dyn Write, positions: &[GeoPoint]) -> io::Result<()> {
    writer.write_all(b"<coordinates>")?;
    for (i, position) in positions.iter().enumerate() {
        if i > 0 {
            writer.write_all(b" ")?;
        }
        writer.write_all(format_kml_tuple(position).as_bytes())?;
    }
    writer.write_all(b"</coordinates>\n")
}

/// Parse the text content of a `<coordinates>` element
///
/// Tuples that cannot be read are skipped.
pub fn parse_kml_coordinates(text: &str) -> Vec<GeoPoint> {
    let mut positions = Vec::new();

    for token in tuples(text) {
        match COORDINATE_TUPLE.captures(&token) {
            Some(caps) => {
                let longitude = caps[1].parse::<f64>();
                let latitude = caps[2].parse::<f64>();
                let altitude = caps.get(3).map(|m| m.as_str().parse::<f64>());

                let position = match (longitude, latitude, altitude) {
                    (Ok(longitude), Ok(latitude), None) => Some(GeoPoint::new(latitude, longitude)),
                    (Ok(longitude), Ok(latitude), Some(Ok(altitude))) => {
                        Some(GeoPoint::new_3d(latitude, longitude, altitude))
                    }
                    _ => None,
                };

                match position.filter(GeoPoint::is_finite) {
                    Some(position) => positions.push(position),
                    None => debug!("Skipping unreadable KML tuple '{}'", token),
                }
            }
            None => debug!("Skipping unreadable KML tuple '{}'", token),
        }
    }

    positions
}

/// Split coordinate text into tuples, gluing tokens around stray commas
/// ("2.35, 48.85" is one tuple).
fn tuples(text: &str) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    let mut pending_join = false;

    for token in text.split_whitespace() {
        let glue = pending_join || token.starts_with(',');
        match result.last_mut() {
            Some(last) if glue => last.push_str(token),
            _ => result.push(token.to_string()),
        }
        pending_join = token.ends_with(',');
    }

    result
}
