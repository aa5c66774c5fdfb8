//! Format conversion command
//!
//! This module implements the command for converting a point between
//! GeoJSON, KML and the encoded blob form.

use std::fs::File;
use std::io::{self, Write};

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::input::load_point;
use crate::config::KmlKitConfig;
use crate::errors::{KmlError, KmlResult};
use crate::geometry::{Geometry, KmlPoint};
use crate::utils::logger::Logger;

/// Output format of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    GeoJson,
    Kml,
    Blob,
}

impl TargetFormat {
    /// Parse a target format name
    pub fn from_name(name: &str) -> KmlResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "geojson" | "json" => Ok(TargetFormat::GeoJson),
            "kml" => Ok(TargetFormat::Kml),
            "blob" | "bin" => Ok(TargetFormat::Blob),
            _ => Err(KmlError::GenericError(format!("Unknown target format: {}", name))),
        }
    }
}

/// Command for converting a point to another format
pub struct ConvertCommand<'a> {
    /// Input file or literal coordinate
    input: String,
    /// Output file; stdout when absent
    output_file: Option<String>,
    /// Target format
    target: TargetFormat,
    /// Logger for recording operations
    logger: &'a Logger,
    /// Loaded settings
    config: &'a KmlKitConfig,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    /// * `config` - Loaded settings
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger, config: &'a KmlKitConfig) -> KmlResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| KmlError::GenericError("Missing input".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output").cloned();

        let target = match args.get_one::<String>("to") {
            Some(name) => TargetFormat::from_name(name)?,
            None => TargetFormat::GeoJson,
        };

        Ok(ConvertCommand {
            input,
            output_file,
            target,
            logger,
            config,
        })
    }

    /// Render the point in the target format
    pub fn render(&self, point: &KmlPoint) -> KmlResult<Vec<u8>> {
        match self.target {
            TargetFormat::GeoJson => {
                let mut text = point.as_geojson()?.to_string();
                text.push('\n');
                Ok(text.into_bytes())
            }
            TargetFormat::Kml => {
                let mut buffer = Vec::new();
                point.write_kml(&mut buffer)?;
                Ok(buffer)
            }
            TargetFormat::Blob => point.encode_with(self.config.byte_order),
        }
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> KmlResult<()> {
        let (point, format) = load_point(&self.input)?;
        info!("Read point from {} as {:?}", self.input, format);

        let rendered = self.render(&point)?;

        match &self.output_file {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(&rendered).map_err(KmlError::SinkWrite)?;
                info!("Wrote {:?} output to {}", self.target, path);
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(&rendered).map_err(KmlError::SinkWrite)?;
                handle.flush().map_err(KmlError::SinkWrite)?;
            }
        }

        self.logger.log(&format!("Converted {} ({:?}) to {:?}", self.input, format, self.target))?;
        Ok(())
    }
}
