//! Placemark fields read when building overlays

/// The placemark a geometry belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct PlacemarkMeta {
    /// Placemark name, shown as the marker title
    pub name: Option<String>,
    /// Placemark description, shown as the marker snippet
    pub description: Option<String>,
    /// Whether the placemark is visible
    pub visibility: bool,
    /// Style reference, usually "#id"
    pub style_url: Option<String>,
}

impl Default for PlacemarkMeta {
    fn default() -> Self {
        PlacemarkMeta {
            name: None,
            description: None,
            visibility: true,
            style_url: None,
        }
    }
}

impl PlacemarkMeta {
    /// Create a visible placemark with a name
    pub fn named(name: &str) -> Self {
        PlacemarkMeta {
            name: Some(name.to_string()),
            ..PlacemarkMeta::default()
        }
    }
}
