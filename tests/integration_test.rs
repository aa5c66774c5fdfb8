//! Integration tests for point conversion and marker binding

use std::fs;

use clap::ArgMatches;
use kmlkit::commands::input::{parse_point_bytes, InputFormat};
use kmlkit::commands::{build_cli, Command, ConvertCommand, InspectCommand};
use kmlkit::config::KmlKitConfig;
use kmlkit::io::byte_order::ByteOrder;
use kmlkit::style::KmlColor;
use kmlkit::utils::logger::Logger;
use kmlkit::{GeoPoint, Geometry, KmlError, KmlPoint, OverlayBuilder, PlacemarkMeta, StyleMap};

#[test]
fn test_complete_point_workflow() {
    let logger = Logger::new("integration_test.log").unwrap();

    // Read a GeoJSON point and show it as a marker
    let point = KmlPoint::from_geojson_str(r#"{"type":"Point","coordinates":[2.3522,48.8566]}"#)
        .unwrap()
        .into_shared();
    let placemark = PlacemarkMeta::named("Paris");
    let mut marker = KmlPoint::build_overlay(&point, &placemark, None, &StyleMap::new(), true);
    assert_eq!(marker.title(), Some("Paris"));

    // Drag the marker to London
    assert!(marker.start_drag());
    assert!(marker.drag_to(GeoPoint::new(51.5074, -0.1278)));
    assert!(marker.end_drag());

    // The point now serializes at the committed position
    let kml = point.borrow().to_kml_string().unwrap();
    assert_eq!(kml, "<Point>\n<coordinates>-0.1278,51.5074</coordinates>\n</Point>\n");

    let json = point.borrow().as_geojson().unwrap();
    assert_eq!(json.to_string(), r#"{"type":"Point","coordinates":[-0.1278,51.5074]}"#);

    // A persisted copy survives the round trip
    let blob = point.borrow().encode_with(ByteOrder::BigEndian).unwrap();
    let restored = KmlPoint::decode(&blob).unwrap();
    assert_eq!(restored, *point.borrow());

    logger.log("Point workflow complete").unwrap();
}

#[test]
fn test_input_detection() {
    let (point, format) = parse_point_bytes(br#"  {"type":"Point","coordinates":[2.3522,48.8566]}"#).unwrap();
    assert_eq!(format, InputFormat::GeoJson);
    assert_eq!(point.position().unwrap(), GeoPoint::new(48.8566, 2.3522));

    let (point, format) = parse_point_bytes(b"<Point><coordinates>2.3522,48.8566,35</coordinates></Point>").unwrap();
    assert_eq!(format, InputFormat::Kml);
    assert_eq!(point.position().unwrap(), GeoPoint::new_3d(48.8566, 2.3522, 35.0));

    let blob = KmlPoint::new(GeoPoint::new(1.0, 2.0)).encode().unwrap();
    let (point, format) = parse_point_bytes(&blob).unwrap();
    assert_eq!(format, InputFormat::Blob);
    assert_eq!(point.position().unwrap(), GeoPoint::new(1.0, 2.0));

    let (point, format) = parse_point_bytes(b"2.3522,48.8566\n").unwrap();
    assert_eq!(format, InputFormat::Coordinate);
    assert_eq!(point.position().unwrap(), GeoPoint::new(48.8566, 2.3522));

    assert!(matches!(parse_point_bytes(b"Paris"), Err(KmlError::InvalidCoordinate(_))));
}

#[test]
fn test_coordinate_text() {
    assert_eq!(GeoPoint::from_lon_lat_str(" 2.3522 , 48.8566 ").unwrap(), GeoPoint::new(48.8566, 2.3522));
    assert_eq!(GeoPoint::from_lon_lat_str("2,48,35").unwrap(), GeoPoint::new_3d(48.0, 2.0, 35.0));
    assert!(GeoPoint::from_lon_lat_str("2.3522").is_err());
    assert!(GeoPoint::from_lon_lat_str("2.3522,NaN").is_err());
    assert!(GeoPoint::from_lon_lat_str("1,2,3,4").is_err());
}

#[test]
fn test_config_from_toml() {
    let config = KmlKitConfig::from_str(r#"
        support_visibility = false
        byte_order = "big"
        log_file = "points.log"

        [default_style]
        icon = "pin.png"
        color = "ff0000ff"
        scale = 2
        heading = 90.5
    "#).unwrap();

    assert!(!config.support_visibility);
    assert_eq!(config.byte_order, ByteOrder::BigEndian);
    assert_eq!(config.log_file, "points.log");

    let icon_style = config.default_style.unwrap().icon_style.unwrap();
    assert_eq!(icon_style.href.as_deref(), Some("pin.png"));
    assert_eq!(icon_style.color, Some(KmlColor { red: 255, green: 0, blue: 0, alpha: 255 }));
    assert_eq!(icon_style.scale, 2.0);
    assert_eq!(icon_style.heading, 90.5);
}

#[test]
fn test_config_defaults_and_errors() {
    assert_eq!(KmlKitConfig::from_str("").unwrap(), KmlKitConfig::default());

    assert!(matches!(KmlKitConfig::from_str("byte_order = \"middle\""), Err(KmlError::Config(_))));
    assert!(matches!(KmlKitConfig::from_str("support_visibility = 1"), Err(KmlError::Config(_))));
    assert!(matches!(KmlKitConfig::from_str("[default_style]\ncolor = \"red\""), Err(KmlError::Config(_))));
    assert!(matches!(KmlKitConfig::from_str("not toml ["), Err(KmlError::Config(_))));
}

#[test]
fn test_kml_color() {
    let color = KmlColor::parse("7f00ff00").unwrap();

    assert_eq!(color, KmlColor { red: 0, green: 255, blue: 0, alpha: 127 });
    assert_eq!(color.to_string(), "7f00ff00");
    assert!(KmlColor::parse("#zz00ff00").is_err());
}

fn cli_args(args: &[&str]) -> ArgMatches {
    build_cli()
        .try_get_matches_from(std::iter::once("kmlkit").chain(args.iter().copied()))
        .unwrap()
}

#[test]
fn test_convert_renders_each_format() {
    let logger = Logger::new("integration_test.log").unwrap();
    let point = KmlPoint::new(GeoPoint::new(48.8566, 2.3522));
    let config = KmlKitConfig::default();

    let geojson = ConvertCommand::new(&cli_args(&["2.3522,48.8566"]), &logger, &config).unwrap();
    assert_eq!(
        geojson.render(&point).unwrap(),
        b"{\"type\":\"Point\",\"coordinates\":[2.3522,48.8566]}\n".to_vec()
    );

    let kml = ConvertCommand::new(&cli_args(&["2.3522,48.8566", "--to", "kml"]), &logger, &config).unwrap();
    assert_eq!(
        kml.render(&point).unwrap(),
        b"<Point>\n<coordinates>2.3522,48.8566</coordinates>\n</Point>\n".to_vec()
    );

    let blob = ConvertCommand::new(&cli_args(&["2.3522,48.8566", "--to", "blob"]), &logger, &config).unwrap();
    let data = blob.render(&point).unwrap();
    assert_eq!(&data[..2], b"II");
    assert_eq!(KmlPoint::decode(&data).unwrap(), point);

    assert!(ConvertCommand::new(&cli_args(&["2.3522,48.8566", "--to", "gpx"]), &logger, &config).is_err());
}

#[test]
fn test_convert_uses_configured_byte_order() {
    let logger = Logger::new("integration_test.log").unwrap();
    let config = KmlKitConfig::from_str("byte_order = \"big\"").unwrap();
    let point = KmlPoint::new(GeoPoint::new_3d(48.8566, 2.3522, 35.0));

    let command = ConvertCommand::new(&cli_args(&["2.3522,48.8566", "-t", "blob"]), &logger, &config).unwrap();
    let data = command.render(&point).unwrap();

    assert_eq!(&data[..4], &[b'M', b'M', 1, 0x03]);
    assert_eq!(&data[4..12], &48.8566f64.to_be_bytes());
    assert_eq!(KmlPoint::decode(&data).unwrap(), point);
}

#[test]
fn test_convert_writes_output_file() {
    let logger = Logger::new("integration_test.log").unwrap();
    let config = KmlKitConfig::default();
    let output = std::env::temp_dir().join("kmlkit_convert_output.kml");
    let output_path = output.to_string_lossy().into_owned();

    let command = ConvertCommand::new(
        &cli_args(&["-0.1278,51.5074,11", "--to", "kml", "-o", &output_path]),
        &logger,
        &config,
    ).unwrap();
    command.execute().unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "<Point>\n<coordinates>-0.1278,51.5074,11</coordinates>\n</Point>\n");
    let _ = fs::remove_file(&output);
}

#[test]
fn test_inspect_drag_commits_into_point() {
    let logger = Logger::new("integration_test.log").unwrap();
    let config = KmlKitConfig::default();
    let args = cli_args(&["2.3522,48.8566", "--name", "Paris", "--drag-to", "-0.1278,51.5074"]);

    let command = InspectCommand::new(&args, &logger, &config).unwrap();
    let inspection = command.inspect().unwrap();

    assert_eq!(inspection.drag_delivered, Some(true));
    assert_eq!(inspection.marker.title(), Some("Paris"));
    assert_eq!(inspection.marker.position(), GeoPoint::new(51.5074, -0.1278));
    assert_eq!(inspection.point.borrow().position().unwrap(), GeoPoint::new(51.5074, -0.1278));

    command.execute().unwrap();
}

#[test]
fn test_inspect_hidden_marker_refuses_drag() {
    let logger = Logger::new("integration_test.log").unwrap();
    let args = cli_args(&["2.3522,48.8566", "--hidden", "--drag-to", "-0.1278,51.5074"]);

    let config = KmlKitConfig::default();
    let inspection = InspectCommand::new(&args, &logger, &config).unwrap().inspect().unwrap();

    assert!(!inspection.marker.is_enabled());
    assert_eq!(inspection.drag_delivered, Some(false));
    assert_eq!(inspection.marker.position(), GeoPoint::new(48.8566, 2.3522));
    assert_eq!(inspection.point.borrow().position().unwrap(), GeoPoint::new(48.8566, 2.3522));

    // Visibility is ignored when the configuration turns it off
    let config = KmlKitConfig::from_str("support_visibility = false").unwrap();
    let inspection = InspectCommand::new(&args, &logger, &config).unwrap().inspect().unwrap();

    assert!(inspection.marker.is_enabled());
    assert_eq!(inspection.drag_delivered, Some(true));
    assert_eq!(inspection.point.borrow().position().unwrap(), GeoPoint::new(51.5074, -0.1278));
}

#[test]
fn test_inspect_without_drag() {
    let logger = Logger::new("integration_test.log").unwrap();
    let config = KmlKitConfig::default();
    let args = cli_args(&["2.3522,48.8566", "--inspect"]);

    let inspection = InspectCommand::new(&args, &logger, &config).unwrap().inspect().unwrap();

    assert_eq!(inspection.drag_delivered, None);
    assert!(inspection.marker.is_bound());
    assert_eq!(inspection.point.borrow().position().unwrap(), GeoPoint::new(48.8566, 2.3522));
}
