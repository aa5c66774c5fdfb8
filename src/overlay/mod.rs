//! Map overlays built from geometries
//!
//! Markers are the visual proxies of point geometries. They keep a
//! non-owning link to the geometry and push drag results back into it.

pub mod drag;
pub mod marker;

pub use self::drag::{KmlPointDragListener, MarkerDragListener};
pub use self::marker::{Marker, MarkerIcon, RelatedObject};
