//! Marker styling
//!
//! Styles are resolved outside of the geometry: a geometry only asks a
//! [`StyleResolver`] for the placemark's named style and lets the icon style
//! decorate the marker it built.

mod color;

pub use self::color::KmlColor;

use std::collections::HashMap;

use log::debug;

use crate::overlay::{Marker, MarkerIcon};

/// Icon styling applied to point markers
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Icon image reference
    pub href: Option<String>,
    /// Tint color
    pub color: Option<KmlColor>,
    /// Icon scale factor
    pub scale: f32,
    /// Icon rotation in degrees
    pub heading: f32,
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle {
            href: None,
            color: None,
            scale: 1.0,
            heading: 0.0,
        }
    }
}

impl IconStyle {
    /// Decorate a marker with this icon style
    pub fn style_marker(&self, marker: &mut Marker) {
        marker.set_icon(MarkerIcon {
            href: self.href.clone(),
            color: self.color,
            scale: self.scale,
        });
        marker.set_rotation(self.heading);
    }
}

/// A resolved style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Icon styling, if the style defines any
    pub icon_style: Option<IconStyle>,
}

impl Style {
    /// Create a style carrying only icon styling
    pub fn with_icon(icon_style: IconStyle) -> Self {
        Style { icon_style: Some(icon_style) }
    }
}

/// Looks up shared styles by id
pub trait StyleResolver {
    /// Resolve a style from a placemark style URL
    fn get_style(&self, style_url: &str) -> Option<&Style>;
}

/// Document-level style table keyed by style id
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    styles: HashMap<String, Style>,
}

impl StyleMap {
    /// Create an empty style table
    pub fn new() -> Self {
        StyleMap::default()
    }

    /// Register a style under an id, replacing any previous one
    pub fn add_style(&mut self, id: &str, style: Style) {
        self.styles.insert(id.to_string(), style);
    }
}

impl StyleResolver for StyleMap {
    fn get_style(&self, style_url: &str) -> Option<&Style> {
        // Local references are written "#id"
        let id = style_url.strip_prefix('#').unwrap_or(style_url);
        let style = self.styles.get(id);
        if style.is_none() && !id.is_empty() {
            debug!("No style registered for '{}'", style_url);
        }
        style
    }
}
