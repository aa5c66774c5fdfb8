//! Byte order handling for encoded geometries
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when encoding and decoding
//! geometry blobs.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Result, Write};

use crate::errors::{KmlError, KmlResult};

/// Represents the byte order of an encoded geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the blob header
    pub fn detect(reader: &mut dyn Read) -> KmlResult<Self> {
        let byte_order = reader.read_u16::<LittleEndian>()?;
        match byte_order {
            0x4949 => Ok(ByteOrder::LittleEndian), // "II"
            0x4D4D => Ok(ByteOrder::BigEndian),    // "MM"
            _ => Err(KmlError::InvalidByteOrder(byte_order)),
        }
    }

    /// The two marker bytes written at the start of a blob
    pub fn mark(&self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => *b"II",
            ByteOrder::BigEndian => *b"MM",
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Parse a byte order from a configuration value ("little" or "big")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "little" | "le" | "ii" => Some(ByteOrder::LittleEndian),
            "big" | "be" | "mm" => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::LittleEndian
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler {
    /// Read an f64 value
    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64>;

    /// Write an f64 value
    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }

    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()> {
        writer.write_f64::<LittleEndian>(value)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }

    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()> {
        writer.write_f64::<BigEndian>(value)
    }
}
