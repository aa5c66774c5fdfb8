pub mod errors;
pub mod coordinate;
pub mod geometry;
pub mod overlay;
pub mod style;
pub mod placemark;
pub mod io;
pub mod utils;
pub mod config;
pub mod commands;

pub use errors::{KmlError, KmlResult};
pub use coordinate::GeoPoint;
pub use geometry::{Geometry, KmlPoint, OverlayBuilder, SharedPoint};
pub use overlay::{KmlPointDragListener, Marker, MarkerDragListener, RelatedObject};
pub use placemark::PlacemarkMeta;
pub use style::{IconStyle, Style, StyleMap, StyleResolver};
