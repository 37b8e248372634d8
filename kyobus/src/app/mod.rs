use std::path::Path;

use clap::Parser;

use crate::config::{AppConfig, LoggingConfig};
use crate::error::RunError;
use crate::pipeline::Pipeline;
use crate::simulation::CommandEngine;

/// Electric bus depot simulation pipeline for the Kyoto municipal bus
/// network. one invocation clears the configured database, loads the input
/// dump, runs the simulation framework and writes the result documents to
/// the output directory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct KyobusApp {
    /// path to the TOML settings file
    #[arg(long, default_value_t = String::from("config.toml"))]
    pub config_file: String,
}

impl KyobusApp {
    pub fn run(&self) -> Result<(), RunError> {
        let config = AppConfig::from_file(Path::new(&self.config_file))?;
        init_logging(&config.logging);
        log::info!("starting run at {}", chrono::Local::now().to_rfc3339());
        log::debug!("cwd: {:?}", std::env::current_dir());

        let engine = CommandEngine::new(&config.simulation);
        let mut pipeline = Pipeline::new(&config, engine);
        pipeline.run().map(|_| ())
    }
}

/// the settings file carries the filter level, so the logger comes up after
/// configuration is read; RUST_LOG still wins when set.
fn init_logging(config: &LoggingConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level.as_str()),
    )
    .init();
}
