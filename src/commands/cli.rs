//! Argument definitions for the `kmlkit` binary

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `kmlkit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("KmlKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert and inspect KML/GeoJSON points")
        .arg(
            Arg::new("input")
                .help("Input file (GeoJSON, KML or blob) or a 'lon,lat[,alt]' coordinate")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Output format (geojson, kml, blob)")
                .value_name("FORMAT")
                .default_value("geojson")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file, stdout when omitted")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (defaults to kmlkit.toml when present)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Build the marker for the point and report its state")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Placemark name used as marker title")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .help("Placemark description used as marker snippet")
                .value_name("TEXT")
                .required(false),
        )
        .arg(
            Arg::new("hidden")
                .long("hidden")
                .help("Mark the placemark as not visible")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("drag-to")
                .long("drag-to")
                .help("Drag the marker to 'lon,lat[,alt]' and report the committed point")
                .value_name("COORDINATE")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
