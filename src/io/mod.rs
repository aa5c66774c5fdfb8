//! I/O utilities for geometry encoding
//!
//! This module provides the byte order strategies and the private binary
//! layout used to duplicate and persist geometries.

pub mod byte_order;
pub mod parcel;
#[cfg(test)]
mod tests;
