//! Point and marker inspection command
//!
//! Builds the marker a map would show for a point and reports its state.
//! With `--drag-to`, the marker is dragged and the committed position of
//! the point is reported as well.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::input::load_point;
use crate::config::KmlKitConfig;
use crate::coordinate::GeoPoint;
use crate::errors::{KmlError, KmlResult};
use crate::geometry::{Geometry, KmlPoint, OverlayBuilder, SharedPoint};
use crate::geometry::kml::format_kml_tuple;
use crate::overlay::Marker;
use crate::placemark::PlacemarkMeta;
use crate::style::StyleMap;
use crate::utils::logger::Logger;

/// Outcome of an inspection
#[derive(Debug)]
pub struct Inspection {
    /// The point the marker was built from
    pub point: SharedPoint,
    /// The marker, after the drag if one was requested
    pub marker: Marker,
    /// Whether the requested drag reached the marker, `None` without `--drag-to`
    pub drag_delivered: Option<bool>,
}

/// Command for inspecting a point and its marker
pub struct InspectCommand<'a> {
    /// Input file or literal coordinate
    input: String,
    /// Placemark fields for the marker
    placemark: PlacemarkMeta,
    /// Optional drag target
    drag_to: Option<GeoPoint>,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
    /// Loaded settings
    config: &'a KmlKitConfig,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    /// * `config` - Loaded settings
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger, config: &'a KmlKitConfig) -> KmlResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| KmlError::GenericError("Missing input".to_string()))?
            .clone();

        let placemark = PlacemarkMeta {
            name: args.get_one::<String>("name").cloned(),
            description: args.get_one::<String>("description").cloned(),
            visibility: !args.get_flag("hidden"),
            style_url: None,
        };

        let drag_to = match args.get_one::<String>("drag-to") {
            Some(text) => Some(GeoPoint::from_lon_lat_str(text)?),
            None => None,
        };

        Ok(InspectCommand {
            input,
            placemark,
            drag_to,
            verbose: args.get_flag("verbose"),
            logger,
            config,
        })
    }

    /// Describe a marker as name/value pairs
    fn marker_fields(marker: &Marker) -> Vec<(&'static str, String)> {
        vec![
            ("Title", marker.title().unwrap_or("-").to_string()),
            ("Snippet", marker.snippet().unwrap_or("-").to_string()),
            ("Position", format_kml_tuple(&marker.position())),
            ("Draggable", marker.is_draggable().to_string()),
            ("Enabled", marker.is_enabled().to_string()),
            ("Bound", marker.is_bound().to_string()),
            ("Icon", marker.icon()
                .and_then(|icon| icon.href.clone())
                .unwrap_or_else(|| "default".to_string())),
        ]
    }

    fn report(&self, title: &str, fields: &[(&str, String)]) -> KmlResult<()> {
        println!("{}:", title);
        for (name, value) in fields {
            println!("  {}: {}", name, value);
        }
        self.logger.log_section(title, fields)?;
        Ok(())
    }

    /// Load the point, build its marker and apply the requested drag
    pub fn inspect(&self) -> KmlResult<Inspection> {
        let (point, format) = load_point(&self.input)?;
        info!("Inspecting {} point read as {:?}", point.kind(), format);

        let shared = point.into_shared();
        let styles = StyleMap::new();
        let mut marker = KmlPoint::build_overlay(
            &shared,
            &self.placemark,
            self.config.default_style.as_ref(),
            &styles,
            self.config.support_visibility,
        );

        let drag_delivered = self.drag_to.map(|target| {
            let delivered = marker.start_drag() && marker.drag_to(target) && marker.end_drag();
            if !delivered {
                info!("Marker did not accept the drag");
            }
            delivered
        });

        Ok(Inspection { point: shared, marker, drag_delivered })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> KmlResult<()> {
        let inspection = self.inspect()?;
        let point = inspection.point.borrow();
        let position = point.position()?;

        if self.verbose {
            debug!("GeoJSON: {}", point.as_geojson()?);
            debug!("Encoded size: {} bytes", point.encode_with(self.config.byte_order)?.len());
        }

        self.report("Marker", &Self::marker_fields(&inspection.marker))?;
        match inspection.drag_delivered {
            Some(_) => self.report("After drag", &[
                ("Marker", format_kml_tuple(&inspection.marker.position())),
                ("Point", format_kml_tuple(&position)),
            ])?,
            None => self.report("Point", &[("Position", format_kml_tuple(&position))])?,
        }

        Ok(())
    }
}
