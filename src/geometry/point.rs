//! KML and GeoJSON Point

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use log::{debug, warn};
use serde_json::{json, Value};

use crate::coordinate::GeoPoint;
use crate::errors::{KmlError, KmlResult};
use crate::geometry::geojson::{geojson_position, parse_geojson_position};
use crate::geometry::kml::{parse_kml_coordinates, write_kml_coordinates};
use crate::geometry::{Geometry, OverlayBuilder};
use crate::io::byte_order::ByteOrder;
use crate::io::parcel;
use crate::overlay::{KmlPointDragListener, Marker, RelatedObject};
use crate::placemark::PlacemarkMeta;
use crate::style::{Style, StyleResolver};
use crate::utils::xml_utils::read_point_coordinates;

/// A point shared between a caller and the markers built from it
pub type SharedPoint = Rc<RefCell<KmlPoint>>;

/// A geometry holding exactly one position once set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlPoint {
    position: Option<GeoPoint>,
}

impl KmlPoint {
    /// Create a point at the given position
    pub fn new(position: GeoPoint) -> Self {
        KmlPoint { position: Some(position) }
    }

    /// Create a point with no position yet
    pub fn empty() -> Self {
        KmlPoint::default()
    }

    /// Build a point from a GeoJSON Point object
    ///
    /// A missing or malformed `coordinates` member is not an error: the point
    /// is left without a position and [`KmlPoint::position`] fails later.
    pub fn from_geojson(json: &Value) -> Self {
        match json.get("coordinates").and_then(parse_geojson_position) {
            Some(position) => KmlPoint::new(position),
            None => {
                debug!("GeoJSON point has no usable coordinates, leaving position unset");
                KmlPoint::empty()
            }
        }
    }

    /// Parse GeoJSON text and build a point from it
    pub fn from_geojson_str(text: &str) -> KmlResult<Self> {
        let json: Value = serde_json::from_str(text)?;
        Ok(KmlPoint::from_geojson(&json))
    }

    /// Build a point from a KML `<Point>` fragment
    ///
    /// Only the first tuple of `<coordinates>` is used. A fragment without a
    /// readable tuple yields a point without a position.
    pub fn from_kml(xml: &str) -> KmlResult<Self> {
        let text = read_point_coordinates(xml)?.unwrap_or_default();
        let positions = parse_kml_coordinates(&text);
        if positions.len() > 1 {
            debug!("KML point carries {} tuples, keeping the first", positions.len());
        }

        match positions.into_iter().next() {
            Some(position) => Ok(KmlPoint::new(position)),
            None => {
                debug!("KML point has no usable coordinates, leaving position unset");
                Ok(KmlPoint::empty())
            }
        }
    }

    /// Rebuild a point from bytes produced by [`KmlPoint::encode`]
    pub fn decode(data: &[u8]) -> KmlResult<Self> {
        Ok(KmlPoint { position: parcel::read_position(data)? })
    }

    /// Replace the position
    pub fn set_position(&mut self, position: GeoPoint) {
        self.position = Some(position);
    }

    /// The current position
    pub fn position(&self) -> KmlResult<GeoPoint> {
        self.position.ok_or(KmlError::MissingCoordinate)
    }

    /// Check if a position has been set
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Independent copy of this point
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Encode in the native little-endian layout
    pub fn encode(&self) -> KmlResult<Vec<u8>> {
        self.encode_with(ByteOrder::default())
    }

    /// Encode using the given byte order
    pub fn encode_with(&self, byte_order: ByteOrder) -> KmlResult<Vec<u8>> {
        parcel::write_position(self.position.as_ref(), byte_order)
    }

    /// The current position, if it can be written as plain numbers
    fn writable_position(&self) -> KmlResult<GeoPoint> {
        let position = self.position()?;
        if !position.is_finite() {
            return Err(KmlError::InvalidCoordinate(format!("non-finite position {:?}", position)));
        }
        Ok(position)
    }

    /// Render the KML fragment into a string
    pub fn to_kml_string(&self) -> KmlResult<String> {
        let mut buffer = Vec::new();
        self.write_kml(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| KmlError::GenericError(e.to_string()))
    }

    /// Wrap this point for marker binding
    pub fn into_shared(self) -> SharedPoint {
        Rc::new(RefCell::new(self))
    }
}

impl From<GeoPoint> for KmlPoint {
    fn from(position: GeoPoint) -> Self {
        KmlPoint::new(position)
    }
}

impl Geometry for KmlPoint {
    fn kind(&self) -> &'static str {
        "Point"
    }

    fn write_kml(&self, writer: &mut dyn Write) -> KmlResult<()> {
        let position = self.writable_position()?;

        writer.write_all(b"<Point>\n").map_err(KmlError::SinkWrite)?;
        write_kml_coordinates(writer, &[position]).map_err(KmlError::SinkWrite)?;
        writer.write_all(b"</Point>\n").map_err(KmlError::SinkWrite)?;
        Ok(())
    }

    fn as_geojson(&self) -> KmlResult<Value> {
        let position = self.writable_position()?;
        Ok(json!({
            "type": "Point",
            "coordinates": geojson_position(&position),
        }))
    }
}

impl OverlayBuilder for KmlPoint {
    type Overlay = Marker;

    fn build_overlay(
        this: &Rc<RefCell<Self>>,
        placemark: &PlacemarkMeta,
        default_style: Option<&Style>,
        styles: &dyn StyleResolver,
        support_visibility: bool,
    ) -> Marker {
        let mut marker = Marker::new();
        marker.set_title(placemark.name.clone());
        marker.set_snippet(placemark.description.clone());

        let has_position = match this.borrow().position() {
            Ok(position) => {
                marker.set_position(position);
                true
            }
            Err(_) => {
                warn!("Building marker for a point without position, marker disabled");
                false
            }
        };

        let placemark_icon = placemark.style_url.as_deref()
            .and_then(|url| styles.get_style(url))
            .and_then(|style| style.icon_style.as_ref());
        let default_icon = default_style.and_then(|style| style.icon_style.as_ref());
        if let Some(icon_style) = placemark_icon.or(default_icon) {
            icon_style.style_marker(&mut marker);
        }

        // Keep the link from the marker back to the point
        marker.set_related_object(Some(RelatedObject::Point(Rc::downgrade(this))));

        marker.set_draggable(true);
        marker.set_on_marker_drag_listener(Rc::new(KmlPointDragListener));

        if !has_position || (support_visibility && !placemark.visibility) {
            marker.set_enabled(false);
        }

        marker
    }
}
