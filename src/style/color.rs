//! KML color values
//!
//! KML writes colors as eight hex digits in `aabbggrr` order.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{KmlError, KmlResult};

lazy_static! {
    static ref KML_COLOR: Regex = Regex::new(r"^#?([0-9a-fA-F]{8})$").unwrap();
}

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmlColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl KmlColor {
    /// Parse a KML `aabbggrr` color string
    pub fn parse(text: &str) -> KmlResult<Self> {
        let caps = KML_COLOR.captures(text.trim())
            .ok_or_else(|| KmlError::GenericError(format!("Invalid KML color: {}", text)))?;
        let value = u32::from_str_radix(&caps[1], 16)
            .map_err(|e| KmlError::GenericError(format!("Invalid KML color {}: {}", text, e)))?;

        Ok(KmlColor {
            alpha: (value >> 24) as u8,
            blue: (value >> 16) as u8,
            green: (value >> 8) as u8,
            red: value as u8,
        })
    }
}

impl fmt::Display for KmlColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.alpha, self.blue, self.green, self.red)
    }
}
