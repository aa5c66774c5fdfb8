//! KML writing utilities
//!
//! Helpers for writing several geometries into one document, where a
//! single failing geometry must not stop the rest.

use std::io::Write;

use log::error;

use crate::errors::KmlError;
use crate::geometry::Geometry;

/// Write every geometry in order, logging and collecting failures
///
/// Returns the errors of the geometries that failed, paired with their
/// index. An empty vector means everything was written.
pub fn write_kml_geometries(writer: &mut dyn Write, geometries: &[&dyn Geometry]) -> Vec<(usize, KmlError)> {
    let mut failures = Vec::new();

    for (index, geometry) in geometries.iter().enumerate() {
        if let Err(e) = geometry.write_kml(writer) {
            error!("Failed to write {} #{} as KML: {}", geometry.kind(), index, e);
            failures.push((index, e));
        }
    }

    failures
}
