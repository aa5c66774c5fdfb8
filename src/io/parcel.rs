//! Private binary layout used to duplicate and persist geometries
//!
//! Layout: byte order mark (2 bytes), version (1 byte), flags (1 byte),
//! then latitude, longitude and optional altitude as f64 in the marked
//! byte order. Not a public wire format.

use byteorder::{ReadBytesExt, WriteBytesExt};
use log::debug;
use std::io::{Cursor, Read};

use crate::coordinate::GeoPoint;
use crate::errors::{KmlError, KmlResult};
use crate::io::byte_order::ByteOrder;

/// Current layout version
pub const PARCEL_VERSION: u8 = 1;

const FLAG_HAS_COORDINATE: u8 = 0x01;
const FLAG_HAS_ALTITUDE: u8 = 0x02;
const KNOWN_FLAGS: u8 = FLAG_HAS_COORDINATE | FLAG_HAS_ALTITUDE;

/// Encode an optional position in the given byte order
pub fn write_position(position: Option<&GeoPoint>, byte_order: ByteOrder) -> KmlResult<Vec<u8>> {
    let handler = byte_order.create_handler();
    let mut buffer = Vec::with_capacity(28);

    buffer.extend_from_slice(&byte_order.mark());
    buffer.write_u8(PARCEL_VERSION)?;

    let mut flags = 0u8;
    if let Some(p) = position {
        flags |= FLAG_HAS_COORDINATE;
        if p.has_altitude() {
            flags |= FLAG_HAS_ALTITUDE;
        }
    }
    buffer.write_u8(flags)?;

    if let Some(p) = position {
        handler.write_f64(&mut buffer, p.latitude)?;
        handler.write_f64(&mut buffer, p.longitude)?;
        if let Some(altitude) = p.altitude {
            handler.write_f64(&mut buffer, altitude)?;
        }
    }

    Ok(buffer)
}

/// Decode a position written by [`write_position`]
///
/// Returns `Ok(None)` for a blob that was encoded from an empty geometry.
pub fn read_position(data: &[u8]) -> KmlResult<Option<GeoPoint>> {
    let mut reader = Cursor::new(data);

    let byte_order = ByteOrder::detect(&mut reader)?;
    debug!("Detected byte order: {}", byte_order.name());

    let version = reader.read_u8()?;
    if version != PARCEL_VERSION {
        return Err(KmlError::UnsupportedVersion(version));
    }

    let flags = reader.read_u8()?;
    if flags & !KNOWN_FLAGS != 0 {
        return Err(KmlError::InvalidFlags(flags));
    }
    if flags & FLAG_HAS_COORDINATE == 0 {
        if flags & FLAG_HAS_ALTITUDE != 0 {
            return Err(KmlError::InvalidFlags(flags));
        }
        return Ok(None);
    }

    let handler = byte_order.create_handler();
    let latitude = handler.read_f64(&mut reader)?;
    let longitude = handler.read_f64(&mut reader)?;
    let altitude = if flags & FLAG_HAS_ALTITUDE != 0 {
        Some(handler.read_f64(&mut reader)?)
    } else {
        None
    };

    if has_trailing_bytes(&mut reader) {
        debug!("Ignoring trailing bytes after encoded position");
    }

    let position = GeoPoint { latitude, longitude, altitude };
    if !position.is_finite() {
        return Err(KmlError::InvalidCoordinate(format!("non-finite encoded position {:?}", position)));
    }

    Ok(Some(position))
}

fn has_trailing_bytes(reader: &mut dyn Read) -> bool {
    let mut probe = [0u8; 1];
    matches!(reader.read(&mut probe), Ok(n) if n > 0)
}
