use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use kmlkit::config::{KmlKitConfig, DEFAULT_CONFIG_FILE};
use kmlkit::utils::logger::Logger;
use kmlkit::commands::{build_cli, CommandFactory, KmlKitCommandFactory};

fn load_config(path: Option<&String>) -> Result<KmlKitConfig, kmlkit::KmlError> {
    match path {
        Some(path) => KmlKitConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => KmlKitConfig::from_file(DEFAULT_CONFIG_FILE),
        None => Ok(KmlKitConfig::default()),
    }
}

fn main() {
    let matches = build_cli().get_matches();

    let config = match load_config(matches.get_one::<String>("config")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logger = match Logger::new(&config.log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    } else if let Err(e) = Logger::init_global_logger("kmlkit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = KmlKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger, &config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
