//! maintflow CLI entry point.

use clap::Parser;

use maintflow::cli::{handle_error, run, Cli};
use maintflow::infrastructure::config::ConfigLoader;
use maintflow::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => handle_error(err, json_mode),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, json_mode),
    };

    if !config.display.color {
        colored::control::set_override(false);
    }

    match run(cli, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => handle_error(err, json_mode),
    }
}
