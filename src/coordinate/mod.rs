//! Coordinate handling for geographic data

mod point;

pub use self::point::GeoPoint;
