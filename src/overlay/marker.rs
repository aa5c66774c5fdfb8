//! Draggable marker overlay

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::coordinate::GeoPoint;
use crate::geometry::KmlPoint;
use crate::overlay::drag::MarkerDragListener;
use crate::style::KmlColor;

/// Domain object a marker stands for
///
/// The marker never owns it: points are held through a [`Weak`] so that a
/// dropped geometry simply stops receiving drag updates.
#[derive(Clone)]
pub enum RelatedObject {
    /// A point geometry
    Point(Weak<RefCell<KmlPoint>>),
    /// Anything else attached by the caller
    Other(Rc<dyn Any>),
}

impl RelatedObject {
    /// The point this marker is linked to, if it is a live point geometry
    pub fn as_point(&self) -> Option<Rc<RefCell<KmlPoint>>> {
        match self {
            RelatedObject::Point(point) => point.upgrade(),
            RelatedObject::Other(_) => None,
        }
    }
}

impl fmt::Debug for RelatedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelatedObject::Point(point) => write!(f, "Point(alive: {})", point.strong_count() > 0),
            RelatedObject::Other(_) => write!(f, "Other"),
        }
    }
}

/// Icon decoration applied by an icon style
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub href: Option<String>,
    pub color: Option<KmlColor>,
    pub scale: f32,
}

/// A marker shown on the map surface
pub struct Marker {
    title: Option<String>,
    snippet: Option<String>,
    position: GeoPoint,
    related_object: Option<RelatedObject>,
    draggable: bool,
    enabled: bool,
    icon: Option<MarkerIcon>,
    rotation: f32,
    drag_listener: Option<Rc<dyn MarkerDragListener>>,
}

impl Default for Marker {
    fn default() -> Self {
        Marker {
            title: None,
            snippet: None,
            position: GeoPoint::default(),
            related_object: None,
            draggable: false,
            enabled: true,
            icon: None,
            rotation: 0.0,
            drag_listener: None,
        }
    }
}

impl Marker {
    /// Create an enabled, non-draggable marker with default rendering
    pub fn new() -> Self {
        Marker::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    pub fn set_snippet(&mut self, snippet: Option<String>) {
        self.snippet = snippet;
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn set_position(&mut self, position: GeoPoint) {
        self.position = position;
    }

    pub fn related_object(&self) -> Option<&RelatedObject> {
        self.related_object.as_ref()
    }

    /// Replace the back-reference
    pub fn set_related_object(&mut self, related_object: Option<RelatedObject>) {
        self.related_object = related_object;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled markers are kept but neither shown nor interactive
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn icon(&self) -> Option<&MarkerIcon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: MarkerIcon) {
        self.icon = Some(icon);
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Install the drag listener, replacing any previous one
    pub fn set_on_marker_drag_listener(&mut self, listener: Rc<dyn MarkerDragListener>) {
        self.drag_listener = Some(listener);
    }

    /// Whether a drag listener is installed
    pub fn is_bound(&self) -> bool {
        self.drag_listener.is_some()
    }

    fn accepts_drag(&self) -> bool {
        if !self.draggable || !self.enabled {
            debug!("Ignoring drag on marker (draggable: {}, enabled: {})", self.draggable, self.enabled);
            return false;
        }
        true
    }

    /// Begin a drag gesture
    ///
    /// Returns false when the marker is not draggable or disabled.
    pub fn start_drag(&self) -> bool {
        if !self.accepts_drag() {
            return false;
        }
        if let Some(listener) = &self.drag_listener {
            listener.on_marker_drag_start(self);
        }
        true
    }

    /// Move the marker during a drag gesture
    pub fn drag_to(&mut self, position: GeoPoint) -> bool {
        if !self.accepts_drag() {
            return false;
        }
        self.position = position;
        if let Some(listener) = self.drag_listener.clone() {
            listener.on_marker_drag(self);
        }
        true
    }

    /// Finish a drag gesture at the current marker position
    pub fn end_drag(&self) -> bool {
        if !self.accepts_drag() {
            return false;
        }
        if let Some(listener) = &self.drag_listener {
            listener.on_marker_drag_end(self);
        }
        true
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("title", &self.title)
            .field("snippet", &self.snippet)
            .field("position", &self.position)
            .field("related_object", &self.related_object)
            .field("draggable", &self.draggable)
            .field("enabled", &self.enabled)
            .field("icon", &self.icon)
            .field("rotation", &self.rotation)
            .field("bound", &self.is_bound())
            .finish()
    }
}
