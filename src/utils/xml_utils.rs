//! XML utility functions
//!
//! Minimal KML reading: only the pieces a geometry needs, not a document
//! model.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::errors::{KmlError, KmlResult};

/// Extract the text of the first `<coordinates>` element inside `<Point>`
///
/// Returns `Ok(None)` when the fragment has no such element. Malformed XML
/// is an error.
pub fn read_point_coordinates(xml: &str) -> KmlResult<Option<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut point_depth = 0usize;
    let mut in_coordinates = false;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Point" => point_depth += 1,
                b"coordinates" if point_depth > 0 => in_coordinates = true,
                _ => {}
            },
            Event::Empty(e) => {
                if point_depth > 0 && e.local_name().as_ref() == b"coordinates" {
                    return Ok(Some(String::new()));
                }
            }
            Event::Text(t) if in_coordinates => {
                let unescaped = t.unescape().map_err(|e| KmlError::Xml(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(t) if in_coordinates => {
                text.push_str(&String::from_utf8_lossy(&t));
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"coordinates" if in_coordinates => return Ok(Some(text)),
                b"Point" => point_depth = point_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if in_coordinates {
        return Err(KmlError::Xml("unterminated <coordinates> element".to_string()));
    }
    Ok(None)
}

