//! Noiseblock binary: renders the configured image and exits.

use std::process::ExitCode;

use noiseblock::{config::NoiseConfig, logger};

fn main() -> ExitCode {
    logger::init();

    let path = NoiseConfig::path();
    let config = match NoiseConfig::load_or_create(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = noiseblock::run(&config) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
