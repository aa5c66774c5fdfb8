//! Geographic position used by every geometry

use crate::errors::{KmlError, KmlResult};

/// A geographic position
///
/// Latitude comes first internally; the longitude-first ordering of KML and
/// GeoJSON is handled by the format writers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude in meters (optional)
    pub altitude: Option<f64>,
}

impl GeoPoint {
    /// Create a new 2D position
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude, altitude: None }
    }

    /// Create a new position with altitude
    pub fn new_3d(latitude: f64, longitude: f64, altitude: f64) -> Self {
        GeoPoint { latitude, longitude, altitude: Some(altitude) }
    }

    /// Check if this position has an altitude
    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    /// Check that every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.altitude.map_or(true, f64::is_finite)
    }

    /// Parse a position from longitude-first text (format: "lon,lat[,alt]")
    pub fn from_lon_lat_str(text: &str) -> KmlResult<Self> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(KmlError::InvalidCoordinate(
                format!("expected 'lon,lat[,alt]', got '{}'", text)));
        }

        let mut values = Vec::with_capacity(parts.len());
        for part in &parts {
            let value = part.trim().parse::<f64>()
                .map_err(|_| KmlError::InvalidCoordinate(format!("not a number: '{}'", part.trim())))?;
            values.push(value);
        }

        let position = GeoPoint {
            latitude: values[1],
            longitude: values[0],
            altitude: values.get(2).copied(),
        };

        if !position.is_finite() {
            return Err(KmlError::InvalidCoordinate(format!("non-finite value in '{}'", text)));
        }
        Ok(position)
    }
}
