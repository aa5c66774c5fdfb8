//! GeoJSON positions
//!
//! GeoJSON positions are longitude-first arrays: `[lon, lat]` or
//! `[lon, lat, alt]`.

use serde_json::{json, Value};

use crate::coordinate::GeoPoint;

/// Read a GeoJSON position array
///
/// Returns `None` for anything that is not an array of at least two finite
/// numbers. Elements past the altitude are ignored.
pub fn parse_geojson_position(value: &Value) -> Option<GeoPoint> {
    let array = value.as_array()?;
    if array.len() < 2 {
        return None;
    }

    let longitude = array[0].as_f64()?;
    let latitude = array[1].as_f64()?;
    let altitude = match array.get(2) {
        Some(value) => Some(value.as_f64()?),
        None => None,
    };

    Some(GeoPoint { latitude, longitude, altitude }).filter(GeoPoint::is_finite)
}

/// Build a GeoJSON position array, with altitude only when present
pub fn geojson_position(position: &GeoPoint) -> Value {
    match position.altitude {
        Some(altitude) => json!([position.longitude, position.latitude, altitude]),
        None => json!([position.longitude, position.latitude]),
    }
}
