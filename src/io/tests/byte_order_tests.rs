//! Tests for the byte order module

use std::io::Cursor;
use byteorder::{LittleEndian, BigEndian, WriteBytesExt};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler, LittleEndianHandler, BigEndianHandler};

#[test]
fn test_byte_order_detection_little_endian() {
    let mut cursor = Cursor::new(b"II".to_vec());

    let result = ByteOrder::detect(&mut cursor);
    assert_eq!(result.unwrap(), ByteOrder::LittleEndian);
}

#[test]
fn test_byte_order_detection_big_endian() {
    let mut cursor = Cursor::new(b"MM".to_vec());

    let result = ByteOrder::detect(&mut cursor);
    assert_eq!(result.unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap(); // Invalid
    let mut cursor = Cursor::new(buffer);

    let result = ByteOrder::detect(&mut cursor);
    assert!(result.is_err());
}

#[test]
fn test_byte_order_names() {
    assert_eq!(ByteOrder::from_name("little"), Some(ByteOrder::LittleEndian));
    assert_eq!(ByteOrder::from_name(" BIG "), Some(ByteOrder::BigEndian));
    assert_eq!(ByteOrder::from_name("middle"), None);
    assert_eq!(ByteOrder::BigEndian.mark(), *b"MM");
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_f64::<LittleEndian>(48.8566).unwrap();
    let handler = LittleEndianHandler;
    handler.write_f64(&mut buffer, -0.1278).unwrap();
    let mut cursor = Cursor::new(buffer);

    assert_eq!(handler.read_f64(&mut cursor).unwrap(), 48.8566);
    assert_eq!(handler.read_f64(&mut cursor).unwrap(), -0.1278);
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_f64::<BigEndian>(48.8566).unwrap();
    let handler = BigEndianHandler;
    handler.write_f64(&mut buffer, -0.1278).unwrap();
    let mut cursor = Cursor::new(buffer);

    assert_eq!(handler.read_f64(&mut cursor).unwrap(), 48.8566);
    assert_eq!(handler.read_f64(&mut cursor).unwrap(), -0.1278);
}
