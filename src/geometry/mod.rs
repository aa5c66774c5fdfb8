//! Geometries shared by KML and GeoJSON
//!
//! Each geometry kind implements [`Geometry`] for text conversion and
//! [`OverlayBuilder`] for producing its map overlay. Only points live here.

pub mod geojson;
pub mod kml;
mod point;

pub use self::point::{KmlPoint, SharedPoint};

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use serde_json::Value;

use crate::errors::KmlResult;
use crate::placemark::PlacemarkMeta;
use crate::style::{Style, StyleResolver};

/// Text conversions every geometry supports
pub trait Geometry {
    /// GeoJSON type name
    fn kind(&self) -> &'static str;

    /// Write the KML element of this geometry
    ///
    /// Partial output may have been written when this fails.
    fn write_kml(&self, writer: &mut dyn Write) -> KmlResult<()>;

    /// GeoJSON geometry object
    fn as_geojson(&self) -> KmlResult<Value>;
}

/// Builds the map overlay of a geometry
pub trait OverlayBuilder: Geometry {
    type Overlay;

    /// Build an overlay linked back to the shared geometry
    ///
    /// The placemark style wins over `default_style` when it carries icon
    /// styling. With `support_visibility`, an invisible placemark produces a
    /// disabled overlay rather than none.
    fn build_overlay(
        this: &Rc<RefCell<Self>>,
        placemark: &PlacemarkMeta,
        default_style: Option<&Style>,
        styles: &dyn StyleResolver,
        support_visibility: bool,
    ) -> Self::Overlay
    where
        Self: Sized;
}
