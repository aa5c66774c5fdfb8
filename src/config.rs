//! Command-line configuration
//!
//! Settings are read from a TOML file. Every key is optional:
//!
//! ```toml
//! support_visibility = true
//! byte_order = "little"
//! log_file = "kmlkit.log"
//!
//! [default_style]
//! icon = "https://maps.example.org/pin.png"
//! color = "ff0000ff"
//! scale = 1.2
//! heading = 0.0
//! ```

use std::fs;

use log::debug;

use crate::errors::{KmlError, KmlResult};
use crate::io::byte_order::ByteOrder;
use crate::style::{IconStyle, KmlColor, Style};

/// Default configuration file looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "kmlkit.toml";

/// Settings shared by the commands
#[derive(Debug, Clone, PartialEq)]
pub struct KmlKitConfig {
    /// Disable markers of invisible placemarks
    pub support_visibility: bool,
    /// Byte order used when encoding blobs
    pub byte_order: ByteOrder,
    /// Log file path
    pub log_file: String,
    /// Style applied when the placemark has none
    pub default_style: Option<Style>,
}

impl Default for KmlKitConfig {
    fn default() -> Self {
        KmlKitConfig {
            support_visibility: true,
            byte_order: ByteOrder::LittleEndian,
            log_file: "kmlkit.log".to_string(),
            default_style: None,
        }
    }
}

impl KmlKitConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> KmlResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(KmlError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = KmlKitConfig::default();

        if let Some(value) = toml_value.get("support_visibility") {
            config.support_visibility = value.as_bool()
                .ok_or_else(|| KmlError::Config("support_visibility must be a boolean".to_string()))?;
        }

        if let Some(value) = toml_value.get("byte_order") {
            let name = value.as_str()
                .ok_or_else(|| KmlError::Config("byte_order must be a string".to_string()))?;
            config.byte_order = ByteOrder::from_name(name)
                .ok_or_else(|| KmlError::Config(format!("Unknown byte order: {}", name)))?;
        }

        if let Some(value) = toml_value.get("log_file") {
            config.log_file = value.as_str()
                .ok_or_else(|| KmlError::Config("log_file must be a string".to_string()))?
                .to_string();
        }

        if let Some(table) = toml_value.get("default_style").and_then(|v| v.as_table()) {
            config.default_style = Some(Style::with_icon(Self::parse_icon_style(table)?));
        }

        Ok(config)
    }

    /// Helper to parse the icon style table
    fn parse_icon_style(table: &toml::value::Table) -> KmlResult<IconStyle> {
        let mut icon_style = IconStyle::default();

        if let Some(href) = table.get("icon").and_then(|v| v.as_str()) {
            icon_style.href = Some(href.to_string());
        }
        if let Some(color) = table.get("color").and_then(|v| v.as_str()) {
            icon_style.color = Some(KmlColor::parse(color)
                .map_err(|e| KmlError::Config(e.to_string()))?);
        }
        if let Some(scale) = table.get("scale").and_then(Self::as_number) {
            icon_style.scale = scale as f32;
        }
        if let Some(heading) = table.get("heading").and_then(Self::as_number) {
            icon_style.heading = heading as f32;
        }

        Ok(icon_style)
    }

    // TOML keeps integers and floats apart; accept both for numeric fields
    fn as_number(value: &toml::Value) -> Option<f64> {
        value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> KmlResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(KmlError::Io(e)),
        };

        debug!("Loaded configuration from {}", path);
        Self::from_str(&contents)
    }
}
