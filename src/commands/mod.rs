//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod convert_command;
pub mod inspect_command;
pub mod input;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use inspect_command::{Inspection, InspectCommand};

use clap::ArgMatches;
use crate::config::KmlKitConfig;
use crate::errors::KmlResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct KmlKitCommandFactory;

impl KmlKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        KmlKitCommandFactory
    }
}

impl Default for KmlKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for KmlKitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
        config: &'a KmlKitConfig,
    ) -> KmlResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") || args.get_one::<String>("drag-to").is_some() {
            Ok(Box::new(InspectCommand::new(args, logger, config)?))
        } else {
            // Default to conversion
            Ok(Box::new(ConvertCommand::new(args, logger, config)?))
        }
    }
}
