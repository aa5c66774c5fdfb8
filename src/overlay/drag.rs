//! Drag callbacks linking markers back to their geometry

use log::{debug, warn};

use crate::overlay::marker::{Marker, RelatedObject};

/// Receives the three drag hooks of a marker
pub trait MarkerDragListener {
    fn on_marker_drag_start(&self, marker: &Marker);

    fn on_marker_drag(&self, marker: &Marker);

    fn on_marker_drag_end(&self, marker: &Marker);
}

/// Default listener for markers built from a KML point
///
/// Only drag-end commits the marker position into the point; the
/// intermediate moves stay on the marker side.
#[derive(Debug, Default, Clone, Copy)]
pub struct KmlPointDragListener;

impl MarkerDragListener for KmlPointDragListener {
    fn on_marker_drag_start(&self, _marker: &Marker) {}

    fn on_marker_drag(&self, _marker: &Marker) {}

    fn on_marker_drag_end(&self, marker: &Marker) {
        let point = match marker.related_object() {
            Some(RelatedObject::Point(point)) => point.upgrade(),
            _ => None,
        };

        let Some(point) = point else {
            debug!("Marker is not linked to a live point, drag end ignored");
            return;
        };

        let position = marker.position();
        if !position.is_finite() {
            warn!("Marker position {:?} is not finite, drag end ignored", position);
            return;
        }

        match point.try_borrow_mut() {
            Ok(mut point) => point.set_position(position),
            Err(_) => warn!("Point is borrowed elsewhere, drag end ignored"),
        };
    }
}
