//! Utility modules for common functionality
//!
//! This module provides logging, XML reading and KML writing helpers used
//! throughout the crate.

pub mod logger;
pub(crate) mod xml_utils;
pub mod write_utils;
